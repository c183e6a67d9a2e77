use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool, Row};
use typed_builder::TypedBuilder;

use crate::common::{require, DirectoryError};

/// Show - a scheduled event linking one venue and one artist at a specific
/// time. Immutable after creation; removed only via the FK cascade.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Show {
    pub id: i32,
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: NaiveDateTime,
}

/// Input record for show creation; all three fields required
#[derive(Debug, Clone, Deserialize, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
pub struct ShowDraft {
    pub venue_id: Option<i32>,
    pub artist_id: Option<i32>,
    pub start_time: Option<NaiveDateTime>,
}

/// One JOINed row per show for the show listing page
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A venue's show joined with its artist, for the venue detail page
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShowWithArtist {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// An artist's show joined with its venue, for the artist detail page
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShowWithVenue {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Show {
    /// Insert a new show. `Validation` if a field is absent; `Referential`
    /// when Postgres rejects the venue or artist foreign key.
    pub async fn create(draft: ShowDraft, conn: &mut PgConnection) -> Result<Self, DirectoryError> {
        let venue_id = *require(&draft.venue_id, "venue_id")?;
        let artist_id = *require(&draft.artist_id, "artist_id")?;
        let start_time = *require(&draft.start_time, "start_time")?;

        sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (venue_id, artist_id, start_time)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(venue_id)
        .bind(artist_id)
        .bind(start_time)
        .fetch_one(conn)
        .await
        .map_err(|e| Self::classify_insert_error(e, venue_id, artist_id))
    }

    /// Map a foreign-key violation (SQLSTATE 23503) onto the entity the
    /// constraint names; everything else stays a storage error.
    fn classify_insert_error(e: sqlx::Error, venue_id: i32, artist_id: i32) -> DirectoryError {
        if let sqlx::Error::Database(db) = &e {
            if db.is_foreign_key_violation() {
                return match db.constraint() {
                    Some(c) if c.contains("artist") => DirectoryError::Referential {
                        entity: "artist",
                        id: artist_id,
                    },
                    _ => DirectoryError::Referential {
                        entity: "venue",
                        id: venue_id,
                    },
                };
            }
        }
        DirectoryError::Storage(e)
    }

    /// All shows with venue and artist names resolved, in show-id order
    pub async fn list_with_names(pool: &PgPool) -> Result<Vec<ShowListing>, DirectoryError> {
        sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT s.venue_id, v.name AS venue_name,
                   s.artist_id, a.name AS artist_name,
                   a.image_link AS artist_image_link,
                   s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            JOIN artists a ON a.id = s.artist_id
            ORDER BY s.id
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// A venue's shows with each show's artist resolved
    pub async fn for_venue(
        venue_id: i32,
        pool: &PgPool,
    ) -> Result<Vec<ShowWithArtist>, DirectoryError> {
        sqlx::query_as::<_, ShowWithArtist>(
            r#"
            SELECT s.artist_id, a.name AS artist_name,
                   a.image_link AS artist_image_link,
                   s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// An artist's shows with each show's venue resolved
    pub async fn for_artist(
        artist_id: i32,
        pool: &PgPool,
    ) -> Result<Vec<ShowWithVenue>, DirectoryError> {
        sqlx::query_as::<_, ShowWithVenue>(
            r#"
            SELECT s.venue_id, v.name AS venue_name,
                   v.image_link AS venue_image_link,
                   s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Upcoming-show count per venue for the grouped listing.
    ///
    /// Strictly `start_time > now`: the listing has always counted this way
    /// while the detail partition uses `>=`. The asymmetry is part of the
    /// contract and regression-tested; do not unify.
    pub async fn upcoming_counts_by_venue(
        now: NaiveDateTime,
        pool: &PgPool,
    ) -> Result<HashMap<i32, i64>, DirectoryError> {
        let rows = sqlx::query(
            "SELECT venue_id, COUNT(*) AS upcoming FROM shows WHERE start_time > $1 GROUP BY venue_id",
        )
        .bind(now)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get::<i32, _>("venue_id"), row.get::<i64, _>("upcoming")))
            .collect())
    }
}
