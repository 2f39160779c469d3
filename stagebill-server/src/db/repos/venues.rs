//! Venue repository
//!
//! - list/search: LEFT JOIN shows for the upcoming count (single query)
//! - create/update: one statement each, RETURNING the stored row

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{Genres, SearchTerm, VenueInput};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
     facebook_link, website, seeking_talent, seeking_description";

/// Venue record from database
#[derive(Debug, Clone, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Form values for editing this row.
    pub fn to_input(&self) -> VenueInput {
        VenueInput {
            name: Some(self.name.clone()),
            city: Some(self.city.clone()),
            state: Some(self.state.clone()),
            address: Some(self.address.clone()),
            phone: Some(self.phone.clone()),
            genres: Genres::parse(self.genres.as_deref()),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website: self.website.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// Venue with its upcoming show count, for listings and search results
#[derive(Debug, Clone, FromRow)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// A show at a venue, joined with the performing artist
#[derive(Debug, Clone, FromRow)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Venue repository
pub struct VenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All venues in id order, each with the number of shows starting after `now`.
    pub async fn list_with_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<VenueSummary>, DbError> {
        self.search(&SearchTerm::default(), now).await
    }

    /// Venues whose name contains `term` (case-insensitive), in id order.
    pub async fn search(
        &self,
        term: &SearchTerm,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueSummary>, DbError> {
        let rows = sqlx::query_as::<_, VenueSummary>(
            r#"
            SELECT
                v.id,
                v.name,
                v.city,
                v.state,
                COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            WHERE v.name ILIKE $1 ESCAPE '\'
            GROUP BY v.id, v.name, v.city, v.state
            ORDER BY v.id
            "#,
        )
        .bind(term.like_pattern())
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single venue by id.
    pub async fn get(&self, id: i32) -> Result<Venue, DbError> {
        sqlx::query_as::<_, Venue>(&format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("venue", id))
    }

    /// Shows booked at a venue, oldest first.
    pub async fn shows_for(&self, venue_id: i32) -> Result<Vec<VenueShow>, DbError> {
        let rows = sqlx::query_as::<_, VenueShow>(
            r#"
            SELECT
                s.artist_id,
                a.name AS artist_name,
                a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(venue_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a venue.
    pub async fn create(&self, input: &VenueInput) -> Result<Venue, DbError> {
        let venue = sqlx::query_as::<_, Venue>(&format!(
            r#"
            INSERT INTO venues (
                name, city, state, address, phone, genres, image_link,
                facebook_link, website, seeking_talent, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {VENUE_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(input.genres.to_column())
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .fetch_one(self.pool)
        .await?;

        Ok(venue)
    }

    /// Overwrite every editable field of a venue.
    pub async fn update(&self, id: i32, input: &VenueInput) -> Result<Venue, DbError> {
        sqlx::query_as::<_, Venue>(&format!(
            r#"
            UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                genres = $7,
                image_link = $8,
                facebook_link = $9,
                website = $10,
                seeking_talent = $11,
                seeking_description = $12
            WHERE id = $1
            RETURNING {VENUE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(input.genres.to_column())
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("venue", id))
    }
}
