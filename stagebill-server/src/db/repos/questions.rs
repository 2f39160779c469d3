//! Question repository
//!
//! Listings return the full id-ordered result; callers paginate in memory.

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{NewQuestion, QuizScope, SearchTerm};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Question record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions in id order.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        self.search(&SearchTerm::default()).await
    }

    /// Questions whose text contains `term` (case-insensitive), in id order.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#
        ))
        .bind(term.like_pattern())
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Questions in one category, in id order.
    pub async fn in_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Questions in `scope` not listed in `previous`.
    pub async fn quiz_candidates(
        &self,
        scope: QuizScope,
        previous: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            WHERE ($1::int4 IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#
        ))
        .bind(scope.category())
        .bind(previous)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a question. Duplicate text fails with `DbError::Conflict`;
    /// an unknown category with `DbError::Constraint`.
    pub async fn create(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(&format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {QUESTION_COLUMNS}
            "#
        ))
        .bind(new.question.as_str())
        .bind(new.answer.as_str())
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from(e).on("question"))?;
        Ok(question)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("question", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{CategoryRepo, MIGRATOR};
    use crate::models::CategoryName;

    async fn seed(pool: &PgPool) -> (i32, i32) {
        let categories = CategoryRepo::new(pool);
        let science = categories.create(&CategoryName::new("Science").unwrap()).await.unwrap();
        let history = categories.create(&CategoryName::new("History").unwrap()).await.unwrap();

        let repo = QuestionRepo::new(pool);
        let rows = [
            ("What is the heaviest organ in the human body?", "The Liver", science.id),
            ("Who discovered penicillin?", "Alexander Fleming", science.id),
            ("Who was the second US president?", "John Adams", history.id),
        ];
        for (q, a, c) in rows {
            repo.create(&NewQuestion::new(Some(q), Some(a), Some(2), Some(c)).unwrap())
                .await
                .unwrap();
        }
        (science.id, history.id)
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn search_and_category_filters(pool: PgPool) {
        let (science, history) = seed(&pool).await;
        let repo = QuestionRepo::new(&pool);

        let who = repo.search(&SearchTerm::new(Some("WHO"))).await.unwrap();
        assert_eq!(who.len(), 2);

        let none = repo.search(&SearchTerm::new(Some("qwert"))).await.unwrap();
        assert!(none.is_empty());

        assert_eq!(repo.in_category(science).await.unwrap().len(), 2);
        assert_eq!(repo.in_category(history).await.unwrap().len(), 1);
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn duplicate_question_conflicts(pool: PgPool) {
        seed(&pool).await;
        let repo = QuestionRepo::new(&pool);
        let dup = NewQuestion::new(Some("Who discovered penicillin?"), Some("Fleming"), None, None).unwrap();

        let err = repo.create(&dup).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { .. }));
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn unknown_category_is_constraint_error(pool: PgPool) {
        let new = NewQuestion::new(Some("Orphan?"), Some("Yes"), Some(1), Some(999)).unwrap();
        let err = QuestionRepo::new(&pool).create(&new).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn quiz_candidates_exclude_previous(pool: PgPool) {
        let (science, _) = seed(&pool).await;
        let repo = QuestionRepo::new(&pool);
        let all = repo.list().await.unwrap();

        let in_science = repo
            .quiz_candidates(QuizScope::Category(science), &[all[0].id])
            .await
            .unwrap();
        assert_eq!(in_science.len(), 1);
        assert_eq!(in_science[0].id, all[1].id);

        let everything = repo.quiz_candidates(QuizScope::All, &[]).await.unwrap();
        assert_eq!(everything.len(), 3);

        let ids: Vec<i32> = all.iter().map(|q| q.id).collect();
        assert!(repo.quiz_candidates(QuizScope::All, &ids).await.unwrap().is_empty());
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn delete_missing_question(pool: PgPool) {
        let err = QuestionRepo::new(&pool).delete(1000).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }
}
