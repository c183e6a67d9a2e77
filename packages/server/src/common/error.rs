use thiserror::Error;

/// Failure taxonomy for the directory core.
///
/// Repository and mutation operations surface one of these; callers can
/// distinguish every case. Absence on a plain lookup is `Ok(None)`, not an
/// error - `NotFound` is reserved for update/delete targets.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("missing required field `{field}`")]
    Validation { field: &'static str },

    #[error("{entity} {id} does not exist")]
    Referential { entity: &'static str, id: i32 },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

impl DirectoryError {
    /// Stable machine-readable kind, used in outcome logging and API bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Referential { .. } => "referential",
            Self::NotFound { .. } => "not_found",
            Self::Storage(_) => "storage",
        }
    }
}

/// Presence check for a required draft field.
pub fn require<'a, T>(
    value: &'a Option<T>,
    field: &'static str,
) -> Result<&'a T, DirectoryError> {
    value.as_ref().ok_or(DirectoryError::Validation { field })
}
