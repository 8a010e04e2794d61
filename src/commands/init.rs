use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;

pub fn run(cli: &Cli) -> Result<()> {
    let config_path = &cli.config;

    if config_path.exists() {
        bail!(
            "{} already exists. Remove it first or use a different path with --config.",
            config_path.display()
        );
    }

    std::fs::write(config_path, Config::default_template())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("{} Created {}", "✓".green(), config_path.display());
    println!("Uncomment the values you want to change; flags still override them.");
    Ok(())
}
