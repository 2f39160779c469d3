//! Artist pages

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use chrono::Utc;

use crate::db::repos::ArtistRepo;
use crate::http::error::PageError;
use crate::http::extractors::PageId;
use crate::http::server::AppState;
use crate::models::{partition_by_start, ArtistInput, FormFields, SearchTerm};
use crate::pages::{self, Notice};

/// GET /artists
async fn list_artists(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let artists = ArtistRepo::new(&state.pool).list(Utc::now()).await?;
    Ok(Html(pages::artists::list(&artists)))
}

/// POST /artists/search
async fn search_artists(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormFields>,
) -> Result<Html<String>, PageError> {
    let term = SearchTerm::new(form.get("search_term"));
    let results = ArtistRepo::new(&state.pool)
        .search(&term, Utc::now())
        .await?;

    Ok(Html(pages::artists::search_results(term.as_str(), &results)))
}

/// GET /artists/{id}
async fn show_artist(
    State(state): State<Arc<AppState>>,
    PageId(id): PageId,
) -> Result<Html<String>, PageError> {
    let repo = ArtistRepo::new(&state.pool);
    let artist = repo.get(id).await?;
    let shows = partition_by_start(repo.shows_for(id).await?, Utc::now(), |s| s.start_time);

    Ok(Html(pages::artists::detail(&artist, &shows)))
}

async fn create_artist_form() -> Html<String> {
    Html(pages::artists::create_form())
}

/// POST /artists/create
async fn create_artist(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormFields>,
) -> Html<String> {
    let input = ArtistInput::from(&form);
    let label = input.name.clone().unwrap_or_default();

    let notice = match ArtistRepo::new(&state.pool).create(&input).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, "Artist created");
            Notice::Success(format!("Artist {} was successfully listed!", label))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create artist");
            Notice::Error(format!("An error occurred. Artist {} could not be listed.", label))
        }
    };

    Html(pages::home(Some(&notice)))
}

async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    PageId(id): PageId,
) -> Result<Html<String>, PageError> {
    let artist = ArtistRepo::new(&state.pool).get(id).await?;
    Ok(Html(pages::artists::edit_form(&artist)))
}

/// POST /artists/{id}/edit
async fn edit_artist(
    State(state): State<Arc<AppState>>,
    PageId(id): PageId,
    Form(form): Form<FormFields>,
) -> Response {
    let input = ArtistInput::from(&form);

    match ArtistRepo::new(&state.pool).update(id, &input).await {
        Ok(_) => {
            tracing::info!(artist_id = id, "Artist updated");
            Redirect::to(&format!("/artists/{}", id)).into_response()
        }
        Err(e) => {
            tracing::error!(artist_id = id, error = %e, "Failed to update artist");
            let notice = Notice::Error(format!(
                "Error in editing Artist {}",
                input.name.as_deref().unwrap_or_default()
            ));
            Html(pages::home(Some(&notice))).into_response()
        }
    }
}

/// Artist routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/{id}", get(show_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MIGRATOR;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use sqlx::PgPool;
    use tower::ServiceExt;

    fn app(pool: PgPool) -> Router {
        router().with_state(AppState::new(pool))
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn search_is_case_insensitive(pool: PgPool) {
        for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
            let body = format!("name={}&genres=Jazz", name.replace(' ', "+"));
            let response = app(pool.clone())
                .oneshot(form_post("/artists/create", &body))
                .await
                .unwrap();
            assert!(body_text(response).await.contains("successfully listed"));
        }

        let response = app(pool.clone())
            .oneshot(form_post("/artists/search", "search_term=A"))
            .await
            .unwrap();
        assert!(body_text(response).await.contains(": 3</h3>"));

        let response = app(pool)
            .oneshot(form_post("/artists/search", "search_term=band"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains(": 1</h3>"));
        assert!(html.contains("The Wild Sax Band"));
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn edit_updates_genres(pool: PgPool) {
        let artist = ArtistRepo::new(&pool)
            .create(&ArtistInput {
                name: Some("Guns N Petals".into()),
                ..ArtistInput::default()
            })
            .await
            .unwrap();

        let response = app(pool.clone())
            .oneshot(form_post(
                &format!("/artists/{}/edit", artist.id),
                "name=Guns+N+Petals&genres=Rock+n+Roll&genres=Punk",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let stored = ArtistRepo::new(&pool).get(artist.id).await.unwrap();
        assert_eq!(stored.genres.as_deref(), Some("Rock n Roll,Punk"));
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn edit_missing_artist_shows_error_notice(pool: PgPool) {
        let response = app(pool)
            .oneshot(form_post("/artists/999/edit", "name=Ghost"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Error in editing Artist Ghost"));
    }
}
