//! Artist repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{ArtistInput, Genres, SearchTerm};

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website, seeking_venue, seeking_description";

/// Artist record from database
#[derive(Debug, Clone, FromRow)]
pub struct Artist {
    pub id: i32,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    pub fn to_input(&self) -> ArtistInput {
        ArtistInput {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: Genres::parse(self.genres.as_deref()),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website: self.website.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// Artist with upcoming show count
#[derive(Debug, Clone, FromRow)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: Option<String>,
    pub num_upcoming_shows: i64,
}

/// A show by an artist, joined with its venue
#[derive(Debug, Clone, FromRow)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All artists in id order.
    pub async fn list(&self, now: DateTime<Utc>) -> Result<Vec<ArtistSummary>, DbError> {
        self.search(&SearchTerm::default(), now).await
    }

    /// Artists whose name contains `term` (case-insensitive), with upcoming counts.
    pub async fn search(
        &self,
        term: &SearchTerm,
        now: DateTime<Utc>,
    ) -> Result<Vec<ArtistSummary>, DbError> {
        let rows = sqlx::query_as::<_, ArtistSummary>(
            r#"
            SELECT
                a.id,
                a.name,
                COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
            FROM artists a
            LEFT JOIN shows s ON s.artist_id = a.id
            WHERE COALESCE(a.name, '') ILIKE $1 ESCAPE '\'
            GROUP BY a.id, a.name
            ORDER BY a.id
            "#,
        )
        .bind(term.like_pattern())
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Artist, DbError> {
        sqlx::query_as::<_, Artist>(&format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("artist", id))
    }

    /// Shows played by an artist, oldest first.
    pub async fn shows_for(&self, artist_id: i32) -> Result<Vec<ArtistShow>, DbError> {
        let rows = sqlx::query_as::<_, ArtistShow>(
            r#"
            SELECT
                s.venue_id,
                v.name AS venue_name,
                v.image_link AS venue_image_link,
                s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(artist_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create(&self, input: &ArtistInput) -> Result<Artist, DbError> {
        let artist = sqlx::query_as::<_, Artist>(&format!(
            r#"
            INSERT INTO artists (
                name, city, state, phone, genres, image_link,
                facebook_link, website, seeking_venue, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {ARTIST_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(input.genres.to_column())
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .fetch_one(self.pool)
        .await?;

        Ok(artist)
    }

    pub async fn update(&self, id: i32, input: &ArtistInput) -> Result<Artist, DbError> {
        sqlx::query_as::<_, Artist>(&format!(
            r#"
            UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website = $9,
                seeking_venue = $10,
                seeking_description = $11
            WHERE id = $1
            RETURNING {ARTIST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(input.genres.to_column())
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("artist", id))
    }
}
