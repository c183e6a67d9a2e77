//! Venue endpoints: thin handlers that deserialize the request, call one
//! core operation, and serialize the resulting view model.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde_json::{json, Value};

use crate::common::{mutations, DirectoryError, SearchResponse};
use crate::domains::shows::models::Show;
use crate::domains::venues::data::{group_by_location, CityGroup, VenueDetail};
use crate::domains::venues::models::{Venue, VenueDraft};
use crate::server::app::AppState;
use crate::server::routes::{ApiError, SearchBody};

/// GET /venues - venues grouped by (city, state)
pub async fn list_venues(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<CityGroup>>, ApiError> {
    let now = Local::now().naive_local();
    let venues = Venue::list_all(&state.db_pool).await?;
    let counts = Show::upcoming_counts_by_venue(now, &state.db_pool).await?;
    Ok(Json(group_by_location(venues, &counts)))
}

/// POST /venues/search
pub async fn search_venues(
    Extension(state): Extension<AppState>,
    Json(body): Json<SearchBody>,
) -> Result<Json<SearchResponse<Venue>>, ApiError> {
    let results = Venue::search_by_name(&body.search_term, &state.db_pool).await?;
    Ok(Json(SearchResponse {
        count: results.len(),
        results,
    }))
}

/// GET /venues/:id - venue detail with past/upcoming shows
pub async fn get_venue(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VenueDetail>, ApiError> {
    let venue = Venue::find_by_id(id, &state.db_pool)
        .await?
        .ok_or(DirectoryError::NotFound { entity: "venue", id })?;
    let shows = Show::for_venue(id, &state.db_pool).await?;
    let now = Local::now().naive_local();
    Ok(Json(VenueDetail::build(venue, shows, now)))
}

/// POST /venues
pub async fn create_venue(
    Extension(state): Extension<AppState>,
    Json(draft): Json<VenueDraft>,
) -> Result<(StatusCode, Json<Venue>), ApiError> {
    let venue = mutations::execute(&state.db_pool, move |conn| {
        Box::pin(async move { Venue::create(draft, conn).await })
    })
    .await?;
    Ok((StatusCode::CREATED, Json(venue)))
}

/// PUT /venues/:id - full replace of all editable fields
pub async fn update_venue(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
    Json(draft): Json<VenueDraft>,
) -> Result<Json<Venue>, ApiError> {
    let venue = mutations::execute(&state.db_pool, move |conn| {
        Box::pin(async move { Venue::update(id, draft, conn).await })
    })
    .await?;
    Ok(Json(venue))
}

/// DELETE /venues/:id
///
/// Always acknowledges `{"success": true}`; the mutation wrapper logs the
/// real outcome. Dependent shows go with the venue via the cascade.
pub async fn delete_venue(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Json<Value> {
    let _ = mutations::execute(&state.db_pool, move |conn| {
        Box::pin(async move { Venue::delete(id, conn).await })
    })
    .await;
    Json(json!({ "success": true }))
}
