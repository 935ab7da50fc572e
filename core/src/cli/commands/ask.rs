use super::print_json;
use crate::answer::resolve_rule;
use crate::cli::OutputFormat;
use colored::Colorize;

pub fn run(question: &str, explain: bool, format: OutputFormat) -> Result<(), String> {
    let rule = resolve_rule(question);

    if format == OutputFormat::Json {
        print_json(&serde_json::json!({
            "question": question,
            "ruleId": rule.id,
            "answer": rule.response,
        }));
        return Ok(());
    }

    if explain {
        println!("{} {}", "rule:".dimmed(), rule.id.cyan());
        println!("{} {}", "when:".dimmed(), rule.predicate.to_string().dimmed());
        println!();
    }
    println!("{}", rule.response);

    Ok(())
}
