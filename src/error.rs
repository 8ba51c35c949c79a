//! Error types
//!
//! Only startup problems and signal-source failures are errors. A frame
//! without a pointer is a normal state, not a failure.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop the game before or during the frame loop
#[derive(Error, Debug)]
pub enum GameError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `Settings`
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config values out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Required asset file not found at startup
    #[error("Asset not found: {path}")]
    AssetMissing { path: PathBuf },

    /// Pointer signal source stopped producing frames
    #[error("Signal source failed: {0}")]
    SignalLost(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
