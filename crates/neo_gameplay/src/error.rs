//! Gameplay error types
//!
//! Gameplay transitions never fail (missing collaborators are skipped with a
//! log line). Errors only surface while loading and validating tuning data.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameplayError {
    #[error("failed to read config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type GameplayResult<T> = Result<T, GameplayError>;
