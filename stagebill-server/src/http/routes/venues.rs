//! Venue pages
//!
//! Reads render a page or the 404/500 page. Writes never fail the request:
//! the outcome is shown as a notice and the cause is logged.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use chrono::Utc;

use crate::db::repos::VenueRepo;
use crate::http::error::PageError;
use crate::http::extractors::PageId;
use crate::http::server::AppState;
use crate::models::{group_by_area, partition_by_start, FormFields, SearchTerm, VenueInput};
use crate::pages::{self, Notice};

/// GET /venues - venues grouped by city and state
async fn list_venues(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let venues = VenueRepo::new(&state.pool)
        .list_with_upcoming(Utc::now())
        .await?;
    let areas = group_by_area(venues, |v| (v.city.as_str(), v.state.as_str()));

    Ok(Html(pages::venues::list(&areas)))
}

/// POST /venues/search
async fn search_venues(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormFields>,
) -> Result<Html<String>, PageError> {
    let term = SearchTerm::new(form.get("search_term"));
    let results = VenueRepo::new(&state.pool)
        .search(&term, Utc::now())
        .await?;

    Ok(Html(pages::venues::search_results(term.as_str(), &results)))
}

/// GET /venues/{id}
async fn show_venue(
    State(state): State<Arc<AppState>>,
    PageId(id): PageId,
) -> Result<Html<String>, PageError> {
    let repo = VenueRepo::new(&state.pool);
    let venue = repo.get(id).await?;
    let shows = partition_by_start(repo.shows_for(id).await?, Utc::now(), |s| s.start_time);

    Ok(Html(pages::venues::detail(&venue, &shows)))
}

/// GET /venues/create
async fn create_venue_form() -> Html<String> {
    Html(pages::venues::create_form())
}

/// POST /venues/create - insert, then the home page with the outcome
async fn create_venue(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormFields>,
) -> Html<String> {
    let input = VenueInput::from(&form);
    let label = input.name.clone().unwrap_or_default();

    let notice = match VenueRepo::new(&state.pool).create(&input).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, "Venue created");
            Notice::Success(format!("Venue {} was successfully listed!", venue.name))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create venue");
            Notice::Error(format!("An error occurred. Venue {} could not be listed.", label))
        }
    };

    Html(pages::home(Some(&notice)))
}

/// DELETE /venues/{id} - not offered
async fn delete_venue(PageId(id): PageId) -> PageError {
    tracing::debug!(venue_id = id, "Venue delete requested");
    PageError::NotImplemented
}

/// GET /venues/{id}/edit
async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    PageId(id): PageId,
) -> Result<Html<String>, PageError> {
    let venue = VenueRepo::new(&state.pool).get(id).await?;
    Ok(Html(pages::venues::edit_form(&venue)))
}

/// POST /venues/{id}/edit - redirect to the venue on success
async fn edit_venue(
    State(state): State<Arc<AppState>>,
    PageId(id): PageId,
    Form(form): Form<FormFields>,
) -> Response {
    let input = VenueInput::from(&form);

    match VenueRepo::new(&state.pool).update(id, &input).await {
        Ok(_) => {
            tracing::info!(venue_id = id, "Venue updated");
            Redirect::to(&format!("/venues/{}", id)).into_response()
        }
        Err(e) => {
            tracing::error!(venue_id = id, error = %e, "Failed to update venue");
            let notice = Notice::Error(format!(
                "Error in editing Venue {}",
                input.name.as_deref().unwrap_or_default()
            ));
            Html(pages::home(Some(&notice))).into_response()
        }
    }
}

/// Venue routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue))
}
