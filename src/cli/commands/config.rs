use anyhow::Result;
use colored::Colorize;
use linemark::config::Config;
use std::path::Path;

use crate::cli::ConfigAction;

pub fn handle(project: &Path, action: ConfigAction) -> Result<()> {
    let mut config = Config::load_or_default(project)?;

    match action {
        ConfigAction::Set { key, value } => {
            println!("{} Setting {} = {}",
                "→".bright_green(),
                key.bright_cyan(),
                value.bright_yellow());

            config.set(&key, &value)?;
            println!("{} Configuration updated", "✓".bright_green());
        }

        ConfigAction::Get { key } => {
            println!("{} = {}", key.bright_cyan(), config.get(&key)?);
        }

        ConfigAction::List => {
            println!("{}", "Current Configuration:".bright_blue().bold());
            if !config.path.exists() {
                println!("  {} No configuration file found, showing defaults", "ℹ".bright_blue());
            }

            for (key, value) in config.entries() {
                println!("  {} = {}", key.bright_cyan(), value.bright_yellow());
            }
        }
    }

    Ok(())
}
