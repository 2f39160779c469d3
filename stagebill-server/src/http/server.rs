//! Axum server setup
//!
//! One binary serves either application:
//! - Booking: HTML pages, no CORS
//! - Trivia: JSON API, CORS for browser frontends
//!
//! Both get request tracing and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// Which application to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    Booking,
    Trivia,
}

impl App {
    pub fn name(self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Trivia => "trivia",
        }
    }

    /// Default bind address: booking on 5000, trivia on 5001
    pub fn default_bind_addr(self) -> SocketAddr {
        match self {
            Self::Booking => SocketAddr::from(([127, 0, 0, 1], 5000)),
            Self::Trivia => SocketAddr::from(([127, 0, 0, 1], 5001)),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    /// Trivia only: allow any method and request header, not just the
    /// ones the API uses
    pub cors_permissive: bool,
}

impl ServerConfig {
    pub fn for_app(app: App) -> Self {
        Self {
            bind_addr: app.default_bind_addr(),
            cors_permissive: false,
        }
    }
}

/// Shared application state, built once at startup and handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

/// Booking site routes
pub fn booking_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::health::router(App::Booking))
        .merge(routes::home::router())
        .merge(routes::venues::router())
        .merge(routes::artists::router())
        .merge(routes::shows::router())
        .fallback(routes::home::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Trivia API routes
pub fn trivia_router(state: Arc<AppState>, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all methods and headers allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .expose_headers(Any)
    };

    Router::new()
        .merge(routes::health::router(App::Trivia))
        .merge(routes::categories::router())
        .merge(routes::questions::router())
        .merge(routes::quizzes::router())
        .fallback(routes::questions::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for `app`.
pub fn router_for(app: App, state: Arc<AppState>, config: &ServerConfig) -> Router {
    match app {
        App::Booking => booking_router(state),
        App::Trivia => trivia_router(state, config.cors_permissive),
    }
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// run_server(pool, App::Trivia, ServerConfig::for_app(App::Trivia)).await?;
/// ```
pub async fn run_server(pool: PgPool, app: App, config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::new(pool);
    let router = router_for(app, state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(app = app.name(), "Server listening on {}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
