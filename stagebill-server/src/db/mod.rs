//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Listings use LEFT JOINs for show counts - no N+1 queries
//! - Rely on DB constraints, map violations to typed errors - no check-then-insert
//! - Each mutation is a single statement and commits or rolls back as a whole

pub mod pool;
pub mod repos;

pub use pool::{
    create_pool, create_pool_with_options, run_migrations, DEFAULT_MAX_CONNECTIONS, MIGRATOR,
};
pub use repos::*;
