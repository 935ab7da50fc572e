use super::print_json;
use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::knowledge::find_topics;
use colored::Colorize;

pub fn run(topic: Option<&str>, format: OutputFormat) -> Result<(), String> {
    let topics = find_topics(topic);

    if topics.is_empty() {
        if let Some(topic) = topic {
            return Err(AppError::not_found(format!("FAQ topic '{topic}'")).into());
        }
        return Err(AppError::not_found("FAQ topics").into());
    }

    if format == OutputFormat::Json {
        print_json(&topics);
        return Ok(());
    }

    // Text output
    for (i, topic) in topics.iter().enumerate() {
        if i > 0 {
            println!();
        }

        println!(
            "{} {}",
            topic.name.bold().cyan(),
            format!("({} FAQs)", topic.faqs.len()).dimmed()
        );
        if !topic.description.is_empty() {
            println!("  {}", topic.description.dimmed());
        }
        println!();

        for faq in topic.faqs {
            println!("  {}", faq.question.green());
            println!("    {}", faq.answer);
        }
    }

    Ok(())
}
