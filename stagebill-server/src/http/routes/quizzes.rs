//! Quiz endpoint
//!
//! Stateless: the client sends back every question id it has seen.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::questions::QuestionResponse;
use crate::db::repos::QuestionRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{lenient_int, JsonBody};
use crate::http::server::AppState;
use crate::models::{pick_question, QuizScope};

/// `quiz_category` as the frontend sends it; only `id` matters
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient_int::required")]
    pub id: i32,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: QuizCategory,
}

/// Next question, absent once the quiz is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionResponse>,
}

/// POST /quizzes
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let previous = req.previous_questions.unwrap_or_default();
    let scope = QuizScope::from_category_id(req.quiz_category.id);

    let candidates = QuestionRepo::new(&state.pool)
        .quiz_candidates(scope, &previous)
        .await?;
    let question = pick_question(candidates, &previous, |q| q.id, &mut rand::thread_rng());

    if question.is_none() {
        tracing::debug!(?scope, served = previous.len(), "Quiz exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question: question.map(QuestionResponse::from),
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MIGRATOR;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use sqlx::PgPool;
    use tower::ServiceExt;

    #[test]
    fn request_shapes() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [1, 2], "quiz_category": {"id": "3", "type": "Art"}}"#,
        )
        .unwrap();
        assert_eq!(req.previous_questions, Some(vec![1, 2]));
        assert_eq!(req.quiz_category.id, 3);

        let req: QuizRequest =
            serde_json::from_str(r#"{"previous_questions": null, "quiz_category": {"id": 0}}"#)
                .unwrap();
        assert_eq!(req.previous_questions, None);
        assert_eq!(QuizScope::from_category_id(req.quiz_category.id), QuizScope::All);

        assert!(serde_json::from_str::<QuizRequest>(r#"{"previous_questions": []}"#).is_err());
    }

    #[test]
    fn exhausted_quiz_has_no_question_field() {
        let value = serde_json::to_value(QuizResponse {
            success: true,
            question: None,
        })
        .unwrap();
        assert_eq!(value, json!({"success": true}));
    }

    async fn play(pool: &PgPool, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/quizzes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router()
            .with_state(AppState::new(pool.clone()))
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn serves_each_question_once(pool: PgPool) {
        sqlx::query("INSERT INTO categories (id, type) VALUES (1, 'Science'), (2, 'Art')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES \
             ('Q1', 'A1', 1, 1), ('Q2', 'A2', 1, 2), ('Q3', 'A3', 2, 3)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let mut previous: Vec<i64> = Vec::new();
        loop {
            let (status, body) = play(
                &pool,
                json!({"previous_questions": previous, "quiz_category": {"id": 1}}),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], true);

            let Some(question) = body.get("question") else {
                break;
            };
            assert_eq!(question["category"], 1);
            let id = question["id"].as_i64().unwrap();
            assert!(!previous.contains(&id));
            previous.push(id);
        }
        assert_eq!(previous.len(), 2);

        let (_, body) = play(&pool, json!({"quiz_category": {"id": 0}})).await;
        assert!(body.get("question").is_some());
    }

    #[tokio::test]
    async fn malformed_body_is_422() {
        // Rejected before any query runs
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/stagebill_unused")
            .unwrap();
        let (status, body) = play(&pool, json!({"quiz_category": {"id": "science"}})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "unprocessable");
    }
}
