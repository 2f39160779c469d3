//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::questions::QuestionResponse;
use crate::db::repos::{Category, CategoryRepo, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiId, JsonBody};
use crate::http::server::AppState;
use crate::models::CategoryName;

/// Categories keyed by id, as the frontend's category sidebar expects
pub fn category_map(categories: &[Category]) -> BTreeMap<i32, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// Category as a list entry
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            kind: c.kind,
        }
    }
}

#[derive(Serialize)]
pub struct CategoryMapResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
    pub total_categories: usize,
}

/// Create category request
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default, rename = "categoryName", alias = "category_name")]
    pub category_name: Option<String>,
}

#[derive(Serialize)]
pub struct CategoryCreatedResponse {
    pub success: bool,
    pub new_category_id: i32,
    pub categories: Vec<CategoryResponse>,
    pub total_categories: usize,
}

#[derive(Serialize)]
pub struct CategoryDeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub categories: Vec<CategoryResponse>,
    pub total_categories: usize,
}

#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub current_category: i32,
}

/// GET /categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoryMapResponse>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    if categories.is_empty() {
        return Err(ApiError::not_found("category", "*"));
    }

    Ok(Json(CategoryMapResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}

/// POST /categories
async fn create_category(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCategoryRequest>,
) -> Result<Json<CategoryCreatedResponse>, ApiError> {
    // An absent name is rejected the same way as an empty one
    let name = CategoryName::new(req.category_name.as_deref().unwrap_or_default())
        .map_err(ApiError::invalid("category"))?;

    let repo = CategoryRepo::new(&state.pool);
    let created = repo.create(&name).await?;
    tracing::info!(category_id = created.id, "Category created");

    let categories = repo.list().await?;
    Ok(Json(CategoryCreatedResponse {
        success: true,
        new_category_id: created.id,
        total_categories: categories.len(),
        categories: categories.into_iter().map(CategoryResponse::from).collect(),
    }))
}

/// DELETE /categories/{id}
async fn delete_category(
    State(state): State<Arc<AppState>>,
    ApiId(id): ApiId,
) -> Result<Json<CategoryDeletedResponse>, ApiError> {
    let repo = CategoryRepo::new(&state.pool);
    repo.delete(id).await?;
    tracing::info!(category_id = id, "Category deleted");

    let categories = repo.list().await?;
    Ok(Json(CategoryDeletedResponse {
        success: true,
        deleted: id,
        total_categories: categories.len(),
        categories: categories.into_iter().map(CategoryResponse::from).collect(),
    }))
}

/// GET /categories/{id}/questions
async fn category_questions(
    State(state): State<Arc<AppState>>,
    ApiId(id): ApiId,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let questions = QuestionRepo::new(&state.pool).in_category(id).await?;
    if questions.is_empty() {
        return Err(ApiError::not_found("category", id));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions: questions.into_iter().map(QuestionResponse::from).collect(),
        current_category: id,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
        .route("/categories/{id}/questions", get(category_questions))
}
