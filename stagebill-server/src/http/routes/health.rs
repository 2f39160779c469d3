//! Liveness endpoint shared by both applications

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::App;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    fn ok(app: App) -> Self {
        Self {
            status: "ok",
            app: app.name(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// GET /health, tagged with the serving app's name
pub fn router<S>(app: App) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(move || async move { Json(HealthResponse::ok(app)) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_names_the_app() {
        let body = serde_json::to_value(HealthResponse::ok(App::Trivia)).unwrap();
        assert_eq!(
            body,
            json!({"status": "ok", "app": "trivia", "version": env!("CARGO_PKG_VERSION")})
        );
    }
}
