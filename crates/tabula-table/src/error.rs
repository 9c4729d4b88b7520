//! Builder and dataset errors.

use tabula_dom::DomError;
use thiserror::Error;

/// Errors returned while assembling a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// `build()` was called before any body section was added.
    #[error("table must have at least one tbody section (dataset missing rows?)")]
    MissingBody,

    /// A tree mutation was rejected.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Errors returned while reading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input is not valid JSON or does not have the dataset shape.
    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),
}
