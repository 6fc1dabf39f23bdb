//! Error taxonomy for configuration resolution
//!
//! Every failure during manifest loading, fragment resolution, override
//! application, or artifact writing maps onto one of these variants. All of
//! them are fatal to the invocation: no launch plan is composed once any of
//! them fires.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("malformed configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("override path '{path}' does not resolve into the merged configuration")]
    MergeConflict { path: String },

    #[error("failed to serialize merged configuration: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ConfigError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::Parse { path: path.into(), message: message.into() }
    }
}
