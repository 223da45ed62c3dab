use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaperTrailError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("No paper found with ID: {0}")]
    PaperNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaperTrailError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
