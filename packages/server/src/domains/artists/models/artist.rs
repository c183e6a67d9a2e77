use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use typed_builder::TypedBuilder;

use crate::common::{require, DirectoryError};

/// Artist - a performer who plays shows. Same shape as Venue minus the
/// street address, with `seeking_venue` in place of `seeking_talent`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Light projection for the artist listing page, which only needs id + name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArtistRef {
    pub id: i32,
    pub name: String,
}

/// Input record for artist create/update (full replace of editable fields)
#[derive(Debug, Clone, Deserialize, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option, into)))]
pub struct ArtistDraft {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Artist {
    /// Find artist by ID; absence is a normal outcome
    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>, DirectoryError> {
        sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// id + name of every artist, in primary-key order
    pub async fn list_refs(pool: &PgPool) -> Result<Vec<ArtistRef>, DirectoryError> {
        sqlx::query_as::<_, ArtistRef>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Case-insensitive substring search over name. An empty term matches
    /// every row.
    pub async fn search_by_name(term: &str, pool: &PgPool) -> Result<Vec<Self>, DirectoryError> {
        sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE name ILIKE $1 ORDER BY id")
            .bind(format!("%{}%", term))
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a new artist; `Validation` if a required field is absent
    pub async fn create(
        draft: ArtistDraft,
        conn: &mut PgConnection,
    ) -> Result<Self, DirectoryError> {
        let name = require(&draft.name, "name")?;
        let city = require(&draft.city, "city")?;
        let state = require(&draft.state, "state")?;
        let genres = require(&draft.genres, "genres")?;

        sqlx::query_as::<_, Artist>(
            r#"
            INSERT INTO artists (
                name, city, state, phone, genres,
                image_link, facebook_link, website, seeking_venue, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(city)
        .bind(state)
        .bind(&draft.phone)
        .bind(genres)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website)
        .bind(draft.seeking_venue.unwrap_or(true))
        .bind(&draft.seeking_description)
        .fetch_one(conn)
        .await
        .map_err(Into::into)
    }

    /// Full replace of all editable fields; `NotFound` if the id is absent
    pub async fn update(
        id: i32,
        draft: ArtistDraft,
        conn: &mut PgConnection,
    ) -> Result<Self, DirectoryError> {
        let name = require(&draft.name, "name")?;
        let city = require(&draft.city, "city")?;
        let state = require(&draft.state, "state")?;
        let genres = require(&draft.genres, "genres")?;

        sqlx::query_as::<_, Artist>(
            r#"
            UPDATE artists
            SET name = $2,
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
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(city)
        .bind(state)
        .bind(&draft.phone)
        .bind(genres)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website)
        .bind(draft.seeking_venue.unwrap_or(true))
        .bind(&draft.seeking_description)
        .fetch_optional(conn)
        .await?
        .ok_or(DirectoryError::NotFound {
            entity: "artist",
            id,
        })
    }

    /// Delete an artist; dependent shows are removed by the FK cascade
    pub async fn delete(id: i32, conn: &mut PgConnection) -> Result<(), DirectoryError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound {
                entity: "artist",
                id,
            });
        }
        Ok(())
    }
}
