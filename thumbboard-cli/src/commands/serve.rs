//! HTTP server command
//!
//! Opens (or creates) the SQLite database and serves the board API.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use thumbboard_core::ThumbboardConfig;
use thumbboard_server::{create_pool, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to [default: 127.0.0.1:5000]
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// SQLite database file, created if missing [default: thumbnails.db]
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ServeArgs {
    /// Flags win over whatever the config file and environment produced.
    pub fn apply(&self, config: &mut ThumbboardConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(ref path) = self.db_path {
            config.database.path = path.clone();
        }
        if let Some(timeout) = self.timeout {
            config.server.timeout_secs = timeout;
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = ThumbboardConfig::load(config_path).context("Failed to load configuration")?;
    args.apply(&mut config);

    tracing::info!(db = %config.database.path.display(), "Opening database");
    let pool = create_pool(&config.database.path, config.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.path.display()))?;

    let server_config = ServerConfig {
        bind_addr: config.server.bind,
        request_timeout: Duration::from_secs(config.server.timeout_secs),
    };

    // Run server (blocks until shutdown)
    run_server(pool, server_config).await.context("Server error")?;

    Ok(())
}
