use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use typed_builder::TypedBuilder;

use crate::common::{require, DirectoryError};

/// Venue - a place that hosts shows
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Input record for venue create/update (full replace of editable fields).
///
/// Every field is optional at the boundary; the operations themselves check
/// presence of name/city/state/genres so a missing required field surfaces
/// as a `Validation` error and rolls the surrounding transaction back.
#[derive(Debug, Clone, Deserialize, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option, into)))]
pub struct VenueDraft {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Venue {
    /// Find venue by ID; absence is a normal outcome
    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>, DirectoryError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All venues in primary-key order
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, DirectoryError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Case-insensitive substring search over name. An empty term matches
    /// every row.
    pub async fn search_by_name(term: &str, pool: &PgPool) -> Result<Vec<Self>, DirectoryError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE name ILIKE $1 ORDER BY id")
            .bind(format!("%{}%", term))
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a new venue; `Validation` if a required field is absent
    pub async fn create(
        draft: VenueDraft,
        conn: &mut PgConnection,
    ) -> Result<Self, DirectoryError> {
        let name = require(&draft.name, "name")?;
        let city = require(&draft.city, "city")?;
        let state = require(&draft.state, "state")?;
        let genres = require(&draft.genres, "genres")?;

        sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues (
                name, city, state, address, phone, genres,
                image_link, facebook_link, website, seeking_talent, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(city)
        .bind(state)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(genres)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website)
        .bind(draft.seeking_talent.unwrap_or(true))
        .bind(&draft.seeking_description)
        .fetch_one(conn)
        .await
        .map_err(Into::into)
    }

    /// Full replace of all editable fields; `NotFound` if the id is absent
    pub async fn update(
        id: i32,
        draft: VenueDraft,
        conn: &mut PgConnection,
    ) -> Result<Self, DirectoryError> {
        let name = require(&draft.name, "name")?;
        let city = require(&draft.city, "city")?;
        let state = require(&draft.state, "state")?;
        let genres = require(&draft.genres, "genres")?;

        sqlx::query_as::<_, Venue>(
            r#"
            UPDATE venues
            SET name = $2,
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
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(city)
        .bind(state)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(genres)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website)
        .bind(draft.seeking_talent.unwrap_or(true))
        .bind(&draft.seeking_description)
        .fetch_optional(conn)
        .await?
        .ok_or(DirectoryError::NotFound { entity: "venue", id })
    }

    /// Delete a venue; dependent shows are removed by the FK cascade
    pub async fn delete(id: i32, conn: &mut PgConnection) -> Result<(), DirectoryError> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound { entity: "venue", id });
        }
        Ok(())
    }
}
