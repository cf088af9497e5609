//! Configuration inspection

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use thumbboard_core::ThumbboardConfig;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (file + environment) as TOML
    Show,
    /// Print the default config file location
    Path,
}

pub fn run_config(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = ThumbboardConfig::load(config_path).context("Failed to load configuration")?;
            print!("{}", config.to_toml()?);
        }
        ConfigCommand::Path => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(ThumbboardConfig::default_path);
            println!("{}", path.display());
        }
    }
    Ok(())
}
