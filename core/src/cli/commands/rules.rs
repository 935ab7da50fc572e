use super::print_json;
use crate::answer::ANSWER_RULES;
use crate::cli::OutputFormat;
use crate::risk::{Ladder, HAZARD_RULES};
use colored::Colorize;

pub fn run(format: OutputFormat) -> Result<(), String> {
    if format == OutputFormat::Json {
        print_json(&serde_json::json!({
            "answers": ANSWER_RULES,
            "hazards": HAZARD_RULES,
        }));
        return Ok(());
    }

    println!("{}", "Answer rules (first match wins)".bold().cyan());
    for (i, rule) in ANSWER_RULES.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, rule.id.green());
        println!("      {}", rule.predicate.to_string().dimmed());
    }
    println!();

    println!("{}", "Hazard rules (first match wins)".bold().cyan());
    for (i, rule) in HAZARD_RULES.iter().enumerate() {
        println!(
            "  {:>2}. {} {}",
            i + 1,
            rule.label.green(),
            format!("[{}]", rule.id).dimmed()
        );
        println!("      when       {}", rule.predicate.to_string().dimmed());
        println!("      likelihood {}", describe_ladder(&rule.likelihood));
        println!("      severity   {}", describe_ladder(&rule.severity));
    }

    Ok(())
}

fn describe_ladder(ladder: &Ladder) -> String {
    let mut parts: Vec<String> = ladder
        .steps
        .iter()
        .map(|(predicate, value)| format!("{value} if {predicate}"))
        .collect();
    parts.push(format!("else {}", ladder.otherwise));
    parts.join("; ")
}
