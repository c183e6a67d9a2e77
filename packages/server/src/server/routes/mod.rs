// HTTP routes
pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

pub use artists::*;
pub use health::*;
pub use shows::*;
pub use venues::*;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::common::DirectoryError;

/// Request body for the search endpoints
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub search_term: String,
}

/// Maps core failures onto HTTP responses without leaking storage detail.
pub struct ApiError(DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DirectoryError::Validation { .. }
            | DirectoryError::Referential { .. } => (StatusCode::BAD_REQUEST, self.0.to_string()),
            DirectoryError::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            DirectoryError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal storage error".to_string(),
            ),
        };

        (
            status,
            Json(json!({ "error": self.0.kind(), "message": message })),
        )
            .into_response()
    }
}
