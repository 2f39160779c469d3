//! HTTP layer
//!
//! Axum routers for both applications:
//! - Booking: server-rendered HTML, errors as HTML pages
//! - Trivia: JSON API with CORS, errors as a JSON envelope
//!
//! Request tracing and graceful shutdown are shared.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, PageError};
pub use server::{booking_router, run_server, trivia_router, App, AppState, ServerConfig, ServerError};
