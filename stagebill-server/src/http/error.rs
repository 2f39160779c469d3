//! Error types with IntoResponse
//!
//! `ApiError` answers the trivia API with a JSON envelope; `PageError`
//! answers the booking site with an HTML error page. Both log the
//! underlying cause and return only a generic message.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;
use crate::pages;

/// Trivia API error with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Empty or duplicate input (400)
    BadRequest { resource: &'static str, reason: String },

    /// Resource or page not found (404)
    NotFound { resource: &'static str, id: String },

    /// Write failed on bad input: missing fields, wrong types, broken references (422, logged)
    Unprocessable { reason: String },

    /// Anything else (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Map a validation failure on `resource` input: absent fields are
    /// unprocessable, empty ones a bad request.
    pub fn invalid(resource: &'static str) -> impl FnOnce(ValidationError) -> Self {
        move |err| match err {
            ValidationError::Missing { .. } => Self::Unprocessable {
                reason: err.to_string(),
            },
            _ => Self::BadRequest {
                resource,
                reason: err.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::BadRequest { .. } => {
                "bad request: possible duplicate or empty question".to_owned()
            }
            Self::NotFound { .. } => "resource not found".to_owned(),
            Self::Unprocessable { .. } => "unprocessable".to_owned(),
            Self::Internal { .. } => "internal service error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { resource, reason } => {
                tracing::debug!(resource, reason = %reason, "Rejected input");
            }
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "Not found");
            }
            Self::Unprocessable { reason } => {
                tracing::warn!("Unprocessable request: {}", reason);
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
            }
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Conflict {
                resource,
                constraint,
            } => Self::BadRequest {
                resource,
                reason: format!("duplicate value for {}", constraint),
            },
            DbError::Constraint(e) => Self::Unprocessable {
                reason: e.to_string(),
            },
            DbError::Sqlx(e) => Self::Internal {
                message: e.to_string(),
            },
        }
    }
}

/// Booking site error rendered as an HTML page
#[derive(Debug)]
pub enum PageError {
    /// 404 page
    NotFound,

    /// 501 page for routes that are deliberately stubs
    NotImplemented,

    /// 500 page, cause logged
    Internal { message: String },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, page) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, pages::errors::not_found()),
            Self::NotImplemented => (StatusCode::NOT_IMPLEMENTED, pages::errors::not_implemented()),
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, pages::errors::server_error())
            }
        };

        (status, Html(page)).into_response()
    }
}

impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound,
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
