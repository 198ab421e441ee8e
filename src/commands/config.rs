use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::{self, Settings};

pub fn run(settings: &Settings, init: bool) -> Result<()> {
    let path = config::config_path()?;

    if init {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        config::create_default_config(&path)?;
        println!("{} {}", "Created".green(), path.display());
        return Ok(());
    }

    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not created, using defaults)", path.display())
    };

    println!("{} {}", "Config file:".bold(), source);
    println!("{} {}", "Saved events:".bold(), settings.store_path.display());
    println!("{} {}", "Time zone:".bold(), settings.timezone.name());
    println!("{} {}", "Default view:".bold(), settings.default_view);
    println!(
        "{} {} ({})",
        "Default color:".bold(),
        settings.default_color,
        settings.default_color.tag().dimmed()
    );

    Ok(())
}
