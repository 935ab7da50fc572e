use super::{print_json, require_settings};
use crate::cli::OutputFormat;
use crate::config::{get_config_root, save_settings_to, Settings, CONFIG_FILE_NAME};
use crate::error::AppError;
use colored::Colorize;

pub fn run(init: bool, format: OutputFormat) -> Result<(), String> {
    let path = get_config_root()
        .map_err(|e| AppError::from(e).to_string())?
        .join(CONFIG_FILE_NAME);

    let created = if init && !path.exists() {
        save_settings_to(&path, &Settings::default())
            .map_err(|e| AppError::from(e).to_string())?;
        true
    } else {
        false
    };

    let settings = require_settings()?;

    if format == OutputFormat::Json {
        print_json(&serde_json::json!({
            "path": path.to_string_lossy(),
            "exists": path.exists(),
            "created": created,
            "settings": settings,
        }));
        return Ok(());
    }

    if created {
        println!("{} Wrote defaults to {}", "✓".green(), path.display());
    } else if path.exists() {
        println!("{} {}", "Settings file:".bold(), path.display());
    } else {
        println!(
            "{} {} {}",
            "Settings file:".bold(),
            path.display(),
            "(not found, using defaults)".dimmed()
        );
    }
    println!("  chat_delay_ms     {}", settings.chat_delay_ms);
    println!("  assess_delay_ms   {}", settings.assess_delay_ms);
    println!("  max_remediations  {}", settings.max_remediations);

    Ok(())
}
