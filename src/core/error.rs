use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("Run duration must not be negative: {0}")]
    NegativeDuration(i64),

    #[error("Parameter not found: {0}")]
    MissingParameter(String),

    #[error("Parameter already exists: {0}")]
    DuplicateParameter(String),

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Run log already exists and overwrite is disabled: {0:?}")]
    ResultExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PetError>;
