//! Pagination types
//!
//! Pages are slices of an already fetched, id-ordered list rather than
//! LIMIT/OFFSET queries, so `total` is always the full result size.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

/// Items per page
pub const PER_PAGE: usize = 10;

/// Requested page (1-indexed)
///
/// Pages below 1 are kept as-is and resolve to an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Index of the first item on this page, or None when the page can't hold items.
    pub fn offset(&self) -> Option<usize> {
        let index = usize::try_from(self.page.checked_sub(1)?).ok()?;
        index.checked_mul(PER_PAGE)
    }

    /// Consume the full list, keeping only this page's items and the total.
    pub fn paginate<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let items = match self.offset() {
            Some(start) => items.into_iter().skip(start).take(PER_PAGE).collect(),
            None => Vec::new(),
        };

        Page {
            items,
            total,
            page: self.page,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// One page of a fully materialized result set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: usize,
    /// Current page number
    pub page: i64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
        }
    }
}

/// Query parameters for pagination
///
/// `page` is taken as a raw string so a non-numeric value falls back to
/// page 1 instead of rejecting the request. Numbers too large for `i64`
/// saturate and land past the end.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = match params.page.as_deref().map(|raw| raw.trim().parse::<i64>()) {
            Some(Ok(page)) => page,
            Some(Err(err)) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 1,
            },
            None => 1,
        };
        Self::new(page)
    }
}
