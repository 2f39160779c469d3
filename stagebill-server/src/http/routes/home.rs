//! Booking home page and the HTML 404 fallback

use std::sync::Arc;

use axum::{response::Html, routing::get, Router};

use crate::http::error::PageError;
use crate::http::server::AppState;
use crate::pages;

/// GET /
async fn home() -> Html<String> {
    Html(pages::home(None))
}

/// Fallback for unknown booking paths
pub async fn not_found() -> PageError {
    PageError::NotFound
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}
