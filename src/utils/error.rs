use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("Validation failed for '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Malformed fixture: {message}")]
    MalformedInput { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FleetError>;
