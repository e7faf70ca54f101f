// Error types for outbox.
// Covers filesystem, data file, and configuration errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Could not determine a home directory for outbox data")]
    NoProjectDirs,
}

pub type Result<T> = std::result::Result<T, OutboxError>;
