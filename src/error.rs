use std::path::PathBuf;

use thiserror::Error;

/// Why a single review could not be analyzed.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("review {0} not found in dataset")]
    NotFound(usize),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("review {id} has no value for field '{field}'")]
    MissingText { id: usize, field: String },

    #[error("review {0} has no text left after cleaning")]
    EmptyText(usize),

    #[error("model error: {0}")]
    Model(String),
}

impl From<anyhow::Error> for ReviewError {
    fn from(err: anyhow::Error) -> Self {
        ReviewError::Model(format!("{err:#}"))
    }
}

/// Failure loading a review CSV.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column '{field}' not found (available: {available})")]
    MissingColumn { field: String, available: String },
}
