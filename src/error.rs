//! Error types for reading operator properties.

use thiserror::Error;

/// Raised while turning the host's property values into an alignment request.
/// Alignment itself never fails.
#[derive(Error, Debug)]
pub enum PropertyError {
    /// A string-coded enum property holds a value outside its item list
    #[error("Invalid code '{code}' for {field}")]
    InvalidCode { field: &'static str, code: String },

    #[error("Cursor can only be used as the destination reference")]
    CursorAsSource,

    #[error("Malformed property JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PropertyError>;
