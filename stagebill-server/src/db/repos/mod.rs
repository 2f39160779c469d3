//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Listings compute show counts with a LEFT JOIN (no N+1)
//! - Uniqueness and references are enforced by constraints; violations
//!   surface as `DbError::Conflict` / `DbError::Constraint`
//! - Results come back in id order unless stated otherwise

pub mod venues;
pub mod artists;
pub mod shows;
pub mod categories;
pub mod questions;

use sqlx::error::ErrorKind;

pub use venues::{Venue, VenueRepo, VenueShow, VenueSummary};
pub use artists::{Artist, ArtistRepo, ArtistShow, ArtistSummary};
pub use shows::{Show, ShowListing, ShowRepo};
pub use categories::{Category, CategoryRepo};
pub use questions::{Question, QuestionRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Unique constraint violated
    #[error("{resource} conflicts on {constraint}")]
    Conflict {
        resource: &'static str,
        constraint: String,
    },

    /// Foreign key, NOT NULL or CHECK constraint violated
    #[error("constraint violation: {0}")]
    Constraint(sqlx::Error),
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Name the resource a unique violation was raised for.
    pub(crate) fn on(self, resource: &'static str) -> Self {
        match self {
            Self::Conflict { constraint, .. } => Self::Conflict {
                resource,
                constraint,
            },
            other => other,
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        let is_constraint = match &err {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation => {
                    return Self::Conflict {
                        resource: "record",
                        constraint: db.constraint().unwrap_or("unique").to_owned(),
                    };
                }
                ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => true,
                _ => false,
            },
            _ => false,
        };

        if is_constraint {
            Self::Constraint(err)
        } else {
            Self::Sqlx(err)
        }
    }
}
