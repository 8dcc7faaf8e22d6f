//! Validate configuration command.

use anyhow::Result;
use direction_config::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    // Loading already validated the settings
    println!("Configuration is valid!");
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
