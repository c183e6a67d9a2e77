//! Show endpoints: list and create only. Shows are never updated, and are
//! deleted only via the venue/artist cascade.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;

use crate::common::mutations;
use crate::domains::shows::data::{build_show_list, ShowListEntry};
use crate::domains::shows::models::{Show, ShowDraft};
use crate::server::app::AppState;
use crate::server::routes::ApiError;

/// GET /shows - every show with both sides resolved
pub async fn list_shows(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<ShowListEntry>>, ApiError> {
    let shows = Show::list_with_names(&state.db_pool).await?;
    Ok(Json(build_show_list(shows)))
}

/// POST /shows
pub async fn create_show(
    Extension(state): Extension<AppState>,
    Json(draft): Json<ShowDraft>,
) -> Result<(StatusCode, Json<Show>), ApiError> {
    let show = mutations::execute(&state.db_pool, move |conn| {
        Box::pin(async move { Show::create(draft, conn).await })
    })
    .await?;
    Ok((StatusCode::CREATED, Json(show)))
}
