//! Category repository

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::CategoryName;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories in id order.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Categories among `ids`, in id order.
    pub async fn with_ids(&self, ids: &[i32]) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a category. A name already in use fails with `DbError::Conflict`.
    pub async fn create(&self, name: &CategoryName) -> Result<Category, DbError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (type) VALUES ($1) RETURNING id, type",
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from(e).on("category"))?;
        Ok(category)
    }

    /// Delete by id. Categories still referenced by questions fail with
    /// `DbError::Constraint`.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("category", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MIGRATOR;

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn duplicate_name_conflicts(pool: PgPool) {
        let repo = CategoryRepo::new(&pool);
        let name = CategoryName::new("Science").unwrap();
        repo.create(&name).await.unwrap();

        let err = repo.create(&name).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { .. }));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn delete_removes_row(pool: PgPool) {
        let repo = CategoryRepo::new(&pool);
        let art = repo.create(&CategoryName::new("Art").unwrap()).await.unwrap();
        let geo = repo.create(&CategoryName::new("Geography").unwrap()).await.unwrap();

        repo.delete(art.id).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), vec![geo.clone()]);
        assert_eq!(repo.with_ids(&[art.id, geo.id]).await.unwrap(), vec![geo]);

        let err = repo.delete(art.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "category", .. }));
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn delete_referenced_category_is_constraint_error(pool: PgPool) {
        let repo = CategoryRepo::new(&pool);
        let history = repo.create(&CategoryName::new("History").unwrap()).await.unwrap();
        sqlx::query("INSERT INTO questions (question, answer, category, difficulty) VALUES ('Q', 'A', $1, 1)")
            .bind(history.id)
            .execute(&pool)
            .await
            .unwrap();

        let err = repo.delete(history.id).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
    }
}
