// crates/atlas-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the load pipeline and the favorites store.
///
/// Query outcomes (empty results, bad pages, unknown parameters) are *not*
/// errors; they are modelled by [`crate::QueryOutcome`].
#[derive(Debug, Error)]
pub enum AtlasError {
    /// A required source (catalog file, dataset) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport failure while fetching the remote catalog.
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A favorites action other than `add` / `remove`.
    #[error("invalid favorites action: {0}")]
    InvalidAction(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
