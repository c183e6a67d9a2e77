//! Artist endpoints, symmetric to the venue ones. The listing uses the
//! id + name projection rather than full rows.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde_json::{json, Value};

use crate::common::{mutations, DirectoryError, SearchResponse};
use crate::domains::artists::data::ArtistDetail;
use crate::domains::artists::models::{Artist, ArtistDraft, ArtistRef};
use crate::domains::shows::models::Show;
use crate::server::app::AppState;
use crate::server::routes::{ApiError, SearchBody};

/// GET /artists - id + name of every artist
pub async fn list_artists(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<ArtistRef>>, ApiError> {
    let refs = Artist::list_refs(&state.db_pool).await?;
    Ok(Json(refs))
}

/// POST /artists/search
pub async fn search_artists(
    Extension(state): Extension<AppState>,
    Json(body): Json<SearchBody>,
) -> Result<Json<SearchResponse<Artist>>, ApiError> {
    let results = Artist::search_by_name(&body.search_term, &state.db_pool).await?;
    Ok(Json(SearchResponse {
        count: results.len(),
        results,
    }))
}

/// GET /artists/:id - artist detail with past/upcoming shows
pub async fn get_artist(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistDetail>, ApiError> {
    let artist = Artist::find_by_id(id, &state.db_pool)
        .await?
        .ok_or(DirectoryError::NotFound {
            entity: "artist",
            id,
        })?;
    let shows = Show::for_artist(id, &state.db_pool).await?;
    let now = Local::now().naive_local();
    Ok(Json(ArtistDetail::build(artist, shows, now)))
}

/// POST /artists
pub async fn create_artist(
    Extension(state): Extension<AppState>,
    Json(draft): Json<ArtistDraft>,
) -> Result<(StatusCode, Json<Artist>), ApiError> {
    let artist = mutations::execute(&state.db_pool, move |conn| {
        Box::pin(async move { Artist::create(draft, conn).await })
    })
    .await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

/// PUT /artists/:id - full replace of all editable fields
pub async fn update_artist(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
    Json(draft): Json<ArtistDraft>,
) -> Result<Json<Artist>, ApiError> {
    let artist = mutations::execute(&state.db_pool, move |conn| {
        Box::pin(async move { Artist::update(id, draft, conn).await })
    })
    .await?;
    Ok(Json(artist))
}

/// DELETE /artists/:id
///
/// Always acknowledges `{"success": true}`; the mutation wrapper logs the
/// real outcome.
pub async fn delete_artist(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Json<Value> {
    let _ = mutations::execute(&state.db_pool, move |conn| {
        Box::pin(async move { Artist::delete(id, conn).await })
    })
    .await;
    Json(json!({ "success": true }))
}
