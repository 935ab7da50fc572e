use super::{print_json, require_settings};
use crate::cli::OutputFormat;
use crate::risk::{self, scale, ClassificationResult, RiskLevel};
use colored::{ColoredString, Colorize};

pub fn run(scenario: &str, all: bool, format: OutputFormat) -> Result<(), String> {
    let result = risk::classify(scenario);

    if format == OutputFormat::Json {
        print_json(&result);
        return Ok(());
    }

    let max_remediations = if all {
        0
    } else {
        require_settings()?.max_remediations
    };
    print_assessment(&result, max_remediations);

    Ok(())
}

fn paint_level(level: RiskLevel, text: &str) -> ColoredString {
    match level {
        RiskLevel::High => text.red().bold(),
        RiskLevel::Medium => text.yellow().bold(),
        RiskLevel::Low => text.green().bold(),
    }
}

/// Print a classification as text, showing at most `max_remediations`
/// control measures (0 shows all).
pub(super) fn print_assessment(result: &ClassificationResult, max_remediations: usize) {
    println!("{}", "Hazard Identification".bold());
    println!("  {}", result.hazard_label.cyan());
    println!();

    println!("{}", "Risk Assessment".bold());
    println!(
        "  Likelihood  {} {}",
        result.likelihood,
        format!("({})", scale::likelihood_label(result.likelihood)).dimmed()
    );
    println!(
        "  Severity    {} {}",
        result.severity,
        format!("({})", scale::severity_label(result.severity)).dimmed()
    );
    println!(
        "  Risk score  {} {}",
        result.risk_score,
        paint_level(result.risk_level, &format!("({} Risk)", result.risk_level))
    );
    println!();

    println!("{}", "Risk Control Measures".bold());
    let shown = result.top_remediations(max_remediations);
    for (i, measure) in shown.iter().enumerate() {
        println!("  {}. {}", i + 1, measure);
    }
    let hidden = result.remediations.len() - shown.len();
    if hidden > 0 {
        println!("  {}", format!("... and {hidden} more").dimmed());
    }
    println!();

    println!(
        "{}",
        paint_level(result.risk_level, result.risk_level.guidance())
    );
}
