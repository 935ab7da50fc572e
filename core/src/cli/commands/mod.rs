pub mod ask;
pub mod assess;
pub mod chat;
pub mod config;
pub mod faq;
pub mod rules;
pub mod samples;

use crate::config::{load_settings, Settings};
use crate::error::AppError;

/// Serialize a value as pretty-printed JSON and print it to stdout.
fn print_json(value: &impl serde::Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("failed to serialize JSON output")
    );
}

/// Load settings, turning failures into a user-facing message.
fn require_settings() -> Result<Settings, String> {
    load_settings().map_err(|e| AppError::from(e).to_string())
}
