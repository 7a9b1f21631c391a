//! Error types for Lunar.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate content: hash={0}")]
    DuplicateContent(String),

    #[error("Material not found: {0}")]
    MaterialNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
