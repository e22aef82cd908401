//! Error types for model listings and output rendering

use std::path::PathBuf;

/// Errors raised while reading a model listing or rendering results
#[derive(Debug, thiserror::Error)]
pub enum AttrsError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read listing from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Invalid model listing: {0}")]
    InvalidListing(#[source] serde_json::Error),

    #[error("Failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type AttrsResult<T> = Result<T, AttrsError>;
