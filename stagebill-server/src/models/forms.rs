//! Booking form input
//!
//! Forms arrive url-encoded and may repeat a key (multi-select genres), so
//! they are read as raw pairs and then shaped into per-entity inputs.
//! Required columns are left to the database: an absent field becomes
//! None and the insert fails on its NOT NULL constraint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::schedule::parse_start_time;
use super::{Genres, ValidationError};

/// Raw url-encoded form pairs in submission order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value submitted for `name`.
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }

    /// Checkbox semantics: checked iff present with a truthy value.
    pub fn flag(&self, name: &str) -> bool {
        match self.get(name) {
            Some(value) => !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "" | "n" | "no" | "false" | "off"
            ),
            None => false,
        }
    }

    fn id(&self, name: &'static str) -> Result<i32, ValidationError> {
        let raw = self
            .get(name)
            .map(str::trim)
            .ok_or(ValidationError::Missing { field: name })?;
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: name });
        }
        raw.parse().map_err(|_| ValidationError::InvalidFormat {
            field: name,
            reason: "expected a numeric id",
        })
    }
}

/// Venue fields from the create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueInput {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Genres,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<&FormFields> for VenueInput {
    fn from(form: &FormFields) -> Self {
        Self {
            name: form.text("name"),
            city: form.text("city"),
            state: form.text("state"),
            address: form.text("address"),
            phone: form.text("phone"),
            genres: Genres::from_values(form.all("genres")),
            image_link: form.text("image_link"),
            facebook_link: form.text("facebook_link"),
            website: form.text("website_link"),
            seeking_talent: form.flag("seeking_talent"),
            seeking_description: form.text("seeking_description"),
        }
    }
}

/// Artist fields from the create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Genres,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<&FormFields> for ArtistInput {
    fn from(form: &FormFields) -> Self {
        Self {
            name: form.text("name"),
            city: form.text("city"),
            state: form.text("state"),
            phone: form.text("phone"),
            genres: Genres::from_values(form.all("genres")),
            image_link: form.text("image_link"),
            facebook_link: form.text("facebook_link"),
            website: form.text("website_link"),
            seeking_venue: form.flag("seeking_venue"),
            seeking_description: form.text("seeking_description"),
        }
    }
}

/// A new show booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowInput {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl TryFrom<&FormFields> for ShowInput {
    type Error = ValidationError;

    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            artist_id: form.id("artist_id")?,
            venue_id: form.id("venue_id")?,
            start_time: parse_start_time(
                form.get("start_time")
                    .ok_or(ValidationError::Missing { field: "start_time" })?,
            )?,
        })
    }
}
