//! Genre lists stored as a single delimited column
//!
//! Rows written by older tooling hold Postgres array literals such as
//! `{Jazz,"Rock n Roll"}`; newer rows hold `Jazz,Rock n Roll`. Both parse
//! to the same list.

use serde::Serialize;

/// Ordered list of genre names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Genres(Vec<String>);

impl Genres {
    /// Parse a stored genres column.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let inner = raw.trim().trim_start_matches('{').trim_end_matches('}');
        Self(
            inner
                .split(',')
                .map(|part| part.trim().trim_matches('"').trim())
                .filter(|part| !part.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Collect genres from submitted form values, each of which may itself
    /// be comma separated.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut genres = Vec::new();
        for value in values {
            genres.extend(Self::parse(Some(value)).0);
        }
        Self(genres)
    }

    /// Storage form: comma-joined, or None when there are no genres.
    pub fn to_column(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.0.iter().any(|g| g == genre)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
