use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

pub const ENV_BIND: &str = "THUMBBOARD_BIND";
pub const ENV_TIMEOUT: &str = "THUMBBOARD_TIMEOUT";
pub const ENV_DB: &str = "THUMBBOARD_DB";

/// Effective configuration for the thumbboard service.
///
/// Precedence: CLI flags > environment > config file > defaults.
/// CLI flags are applied by the binary after [`ThumbboardConfig::load`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbboardConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: SocketAddr,
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file, created on first run if absent
    pub path: PathBuf,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("thumbnails.db"),
            max_connections: 5,
        }
    }
}

impl ThumbboardConfig {
    /// Default config file location: ~/.thumbboard/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".thumbboard")
            .join("config.toml")
    }

    /// Load file config then environment overrides.
    ///
    /// An explicit `path` must exist. The default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) if !p.exists() => {
                return Err(CoreError::NotFound {
                    path: p.to_path_buf(),
                })
            }
            Some(p) => Self::from_file(p)?,
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_with(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| CoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(ENV_BIND) {
            self.server.bind = bind.parse().map_err(|_| CoreError::InvalidEnv {
                var: ENV_BIND,
                reason: format!("'{}' is not a socket address", bind),
            })?;
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            self.server.timeout_secs = timeout.parse().map_err(|_| CoreError::InvalidEnv {
                var: ENV_TIMEOUT,
                reason: format!("'{}' is not a number of seconds", timeout),
            })?;
        }

        if let Some(db) = lookup(ENV_DB) {
            self.database.path = PathBuf::from(db);
        }

        Ok(())
    }

    /// Render as TOML (used by `thumbboard config show`).
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
