//! Error types for turnscribe.
//!
//! Only the outer surface (file I/O, JSON parsing, configuration, format
//! selection) can fail; the merge pipeline itself is total and never
//! returns an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TurnscribeError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Input errors
    #[error("Failed to read {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    InputParse { path: PathBuf, message: String },

    // Output errors
    #[error("Unknown output format: {0} (expected plain, markdown, json, srt or vtt)")]
    UnknownFormat(String),

    #[error("Failed to serialize transcript: {0}")]
    Serialize(#[from] serde_json::Error),

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, TurnscribeError>;
