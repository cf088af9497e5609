//! thumbboard CLI - boards of YouTube thumbnails
//!
//! - `serve`: run the HTTP API and the single-page UI
//! - `resolve`: show the thumbnail URL a video link resolves to
//! - `config`: inspect the effective configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "thumbboard",
    author,
    version,
    about = "Organize YouTube thumbnails into boards",
    long_about = "Serve a small JSON API and web page for collecting YouTube video \
                  thumbnails into named boards, backed by a local SQLite file."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file [default: ~/.thumbboard/config.toml]
    #[arg(long, global = true, env = "THUMBBOARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Resolve a video URL to its maxres thumbnail URL
    Resolve(commands::resolve::ResolveArgs),
    /// Inspect configuration (show, path)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, config_path).await,
        Commands::Resolve(args) => commands::resolve::run_resolve(args),
        Commands::Config(args) => commands::config::run_config(args, config_path),
    }
}
