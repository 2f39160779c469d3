//! Show pages

use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use chrono::Utc;

use crate::db::repos::ShowRepo;
use crate::http::error::PageError;
use crate::http::server::AppState;
use crate::models::{FormFields, ShowInput};
use crate::pages::{self, Notice};

/// GET /shows
async fn list_shows(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let shows = ShowRepo::new(&state.pool).list().await?;
    Ok(Html(pages::shows::list(&shows)))
}

/// GET /shows/create
async fn create_show_form() -> Html<String> {
    Html(pages::shows::create_form(Utc::now()))
}

/// POST /shows/create
async fn create_show(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormFields>,
) -> Html<String> {
    let failed = || Notice::Error("An error occurred. Show could not be listed.".to_owned());

    let notice = match ShowInput::try_from(&form) {
        Err(e) => {
            tracing::warn!(field = e.field(), "Rejected show form: {}", e);
            failed()
        }
        Ok(input) => match ShowRepo::new(&state.pool).create(&input).await {
            Ok(show) => {
                tracing::info!(
                    show_id = show.id,
                    artist_id = show.artist_id,
                    venue_id = show.venue_id,
                    "Show created"
                );
                Notice::Success("Show was successfully listed!".to_owned())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create show");
                failed()
            }
        },
    };

    Html(pages::home(Some(&notice)))
}

/// Show routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}
