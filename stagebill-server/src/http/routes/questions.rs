//! Question endpoints
//!
//! `POST /questions` does double duty: a body carrying `searchTerm` runs a
//! search, anything else creates a question.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::categories::category_map;
use crate::db::repos::{CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{lenient_int, ApiId, JsonBody};
use crate::http::server::AppState;
use crate::models::{NewQuestion, Page, Pagination, PaginationParams, SearchTerm};

/// Question response
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub page: i64,
    pub total_questions: usize,
    pub current_category: Option<i32>,
    pub categories: BTreeMap<i32, String>,
}

/// Body of `POST /questions`
#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default, rename = "searchTerm", alias = "search_term")]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_int::optional")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int::optional")]
    pub category: Option<i32>,
}

/// Search results, or the listing after a create
#[derive(Serialize)]
pub struct QuestionsPostResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i32>,
    pub questions: Vec<QuestionResponse>,
    pub current_page: i64,
    pub total_questions: usize,
}

#[derive(Serialize)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
}

fn page_of(questions: Vec<Question>, page: Pagination) -> Page<QuestionResponse> {
    page.paginate(questions).map(QuestionResponse::from)
}

/// GET /questions?page=N
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let pagination = Pagination::from(params);
    let all = QuestionRepo::new(&state.pool).list().await?;

    let mut referenced: Vec<i32> = all.iter().filter_map(|q| q.category).collect();
    referenced.sort_unstable();
    referenced.dedup();

    let page = page_of(all, pagination);
    if page.is_empty() {
        return Err(ApiError::not_found("questions page", pagination.page));
    }

    let categories = CategoryRepo::new(&state.pool).with_ids(&referenced).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page.items,
        page: page.page,
        total_questions: page.total,
        current_category: None,
        categories: category_map(&categories),
    }))
}

/// POST /questions - search or create
async fn search_or_create(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
    JsonBody(req): JsonBody<QuestionsRequest>,
) -> Result<Json<QuestionsPostResponse>, ApiError> {
    let pagination = Pagination::from(params);
    let repo = QuestionRepo::new(&state.pool);

    if let Some(term) = req.search_term.as_deref() {
        let results = repo.search(&SearchTerm::new(Some(term))).await?;
        let page = page_of(results, pagination);

        return Ok(Json(QuestionsPostResponse {
            success: true,
            created: None,
            questions: page.items,
            current_page: page.page,
            total_questions: page.total,
        }));
    }

    let new = NewQuestion::new(
        req.question.as_deref(),
        req.answer.as_deref(),
        req.difficulty,
        req.category,
    )
    .map_err(ApiError::invalid("question"))?;

    let created = repo.create(&new).await?;
    tracing::info!(question_id = created.id, "Question created");

    let page = page_of(repo.list().await?, pagination);
    Ok(Json(QuestionsPostResponse {
        success: true,
        created: Some(created.id),
        questions: page.items,
        current_page: page.page,
        total_questions: page.total,
    }))
}

/// DELETE /questions/{id}?page=N
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ApiId(id): ApiId,
    Query(params): Query<PaginationParams>,
) -> Result<Json<QuestionDeletedResponse>, ApiError> {
    let repo = QuestionRepo::new(&state.pool);
    repo.delete(id).await?;
    tracing::info!(question_id = id, "Question deleted");

    let page = page_of(repo.list().await?, Pagination::from(params));
    Ok(Json(QuestionDeletedResponse {
        success: true,
        deleted: id,
        questions: page.items,
        total_questions: page.total,
    }))
}

/// Fallback for unknown trivia paths
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::not_found("path", uri.path())
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(search_or_create))
        .route("/questions/{id}", delete(delete_question))
}
