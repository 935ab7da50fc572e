use super::print_json;
use crate::cli::OutputFormat;
use crate::knowledge::{SAMPLE_QUESTIONS, SAMPLE_SCENARIOS};
use colored::Colorize;

pub fn run(format: OutputFormat) -> Result<(), String> {
    if format == OutputFormat::Json {
        print_json(&serde_json::json!({
            "questions": SAMPLE_QUESTIONS,
            "scenarios": SAMPLE_SCENARIOS,
        }));
        return Ok(());
    }

    println!("{}", "Try asking:".bold());
    for question in SAMPLE_QUESTIONS {
        println!("  safety ask {}", format!("\"{question}\"").cyan());
    }
    println!();
    println!("{}", "Sample workplace scenarios:".bold());
    for scenario in SAMPLE_SCENARIOS {
        println!("  safety assess {}", format!("\"{scenario}\"").cyan());
    }

    Ok(())
}
