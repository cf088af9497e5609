//! Structured error types for thumbboard-core.
//!
//! The binary wraps these with `anyhow`; library consumers get the enum.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading the config file failed
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file exists but is not valid TOML for our schema
    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An explicitly requested config file does not exist
    #[error("config file not found: {path:?}")]
    NotFound { path: PathBuf },

    /// Environment override could not be parsed
    #[error("invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },

    /// Rendering the effective config back to TOML failed
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
