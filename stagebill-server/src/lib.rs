//! stagebill-server: booking pages and trivia API over Postgres
//!
//! Two applications share one crate:
//! - the booking site lists, searches and edits venues, artists and shows
//! - the trivia API serves paginated questions, categories and quizzes
//!
//! Layers, bottom-up: `models` (validated inputs and pure helpers),
//! `db` (pool, migrations, repositories), `pages` (HTML rendering) and
//! `http` (routers, extractors, error responses).

pub mod db;
pub mod http;
pub mod models;
pub mod pages;

pub use db::{create_pool, create_pool_with_options, run_migrations, MIGRATOR};
pub use http::{run_server, App, AppState, ServerConfig, ServerError};
