//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use ta_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Overbought above: {}", config.analysis.overbought);
            println!("Oversold below: {}", config.analysis.oversold);
            println!("Default period: {}", config.analysis.default_period);
            println!("Data path: {}", config.data.path);
            println!();
            println!("Effective configuration:");
            println!("{}", config.to_toml()?);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
