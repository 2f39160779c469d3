//! Show timing, venue areas, and start-time parsing/formatting

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use super::ValidationError;

/// Whether a show has already started relative to a reference time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    /// A show is past iff it started strictly before `now`.
    pub fn classify(start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start_time < now {
            Self::Past
        } else {
            Self::Upcoming
        }
    }
}

/// Shows split by timing, each side keeping input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

pub fn partition_by_start<T>(
    items: Vec<T>,
    now: DateTime<Utc>,
    start_of: impl Fn(&T) -> DateTime<Utc>,
) -> Partitioned<T> {
    let (past, upcoming) = items
        .into_iter()
        .partition(|item| ShowTiming::classify(start_of(item), now) == ShowTiming::Past);
    Partitioned { past, upcoming }
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group items by (city, state).
///
/// Areas appear in order of their first item; items keep input order
/// within an area.
pub fn group_by_area<T>(items: Vec<T>, location_of: impl Fn(&T) -> (&str, &str)) -> Vec<Area<T>> {
    let mut areas: Vec<Area<T>> = Vec::new();

    for item in items {
        let (city, state) = location_of(&item);
        let existing = areas
            .iter()
            .position(|area| area.city == city && area.state == state);

        match existing {
            Some(index) => areas[index].venues.push(item),
            None => {
                let area = Area {
                    city: city.to_owned(),
                    state: state.to_owned(),
                    venues: Vec::new(),
                };
                areas.push(area);
                if let Some(last) = areas.last_mut() {
                    last.venues.push(item);
                }
            }
        }
    }

    areas
}

/// Display styles for show start times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Sun 04, 01, 2035 8:00PM`
    Medium,
    /// `Sunday April, 1, 2035 at 8:00PM`
    Full,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Medium => "%a %m, %d, %Y %-I:%M%p",
            Self::Full => "%A %B, %-d, %Y at %-I:%M%p",
        }
    }

    pub fn format(self, value: DateTime<Utc>) -> String {
        value.format(self.pattern()).to_string()
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a submitted start time. Naive values are taken as UTC.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "start_time" });
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or(ValidationError::InvalidFormat {
            field: "start_time",
            reason: "expected YYYY-MM-DD HH:MM:SS",
        })
}
