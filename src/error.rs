// Error types for tag-graph.
// Covers bookmark API errors, cache and edge-file I/O, and serialization.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagGraphError {
    #[error("Delicious API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired access token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Missing access token: pass --token or set DELICIOUS_ACCESS_TOKEN")]
    MissingToken,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TagGraphError>;
