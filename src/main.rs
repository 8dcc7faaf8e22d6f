//! Next-day direction dataset builder CLI.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use direction_config::load_config;
use direction_monitor::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    // Setup logging
    let log_level = match cli.log_level {
        Some(level) => level.as_str().to_string(),
        None => config.logging.level.clone(),
    };
    let json = cli.json_logs || config.logging.is_json();
    let _guard = setup_logging(&log_level, json, config.logging.file.as_deref());

    // Execute command
    match cli.command {
        Commands::Build(args) => cli::commands::build::run(args, &config),
        Commands::Inspect(args) => cli::commands::inspect::run(args, &config),
        Commands::Features => cli::commands::features::run(),
        Commands::ValidateConfig => cli::commands::validate::run(&config),
    }
}
