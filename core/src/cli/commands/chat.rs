use super::assess::print_assessment;
use super::{print_json, require_settings};
use crate::answer;
use crate::assistant::{ChatSession, Responder, Role};
use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::knowledge::GREETING;
use crate::risk;
use colored::Colorize;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::time::Duration;

const ASSESS_PREFIX: &str = "/assess";

pub fn run(delay_ms: Option<u64>, format: OutputFormat) -> Result<(), String> {
    let settings = require_settings()?;
    let chat_delay = Duration::from_millis(delay_ms.unwrap_or(settings.chat_delay_ms));
    let assess_delay = Duration::from_millis(delay_ms.unwrap_or(settings.assess_delay_ms));

    let answers = Responder::new(chat_delay, answer::resolve);
    let assessments = Responder::new(assess_delay, risk::classify);
    let mut session = ChatSession::new();

    let rt = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    let text = format == OutputFormat::Text;

    info!(
        "[chat] starting session, chat_delay={:?} assess_delay={:?}",
        answers.delay(),
        assessments.delay()
    );

    if text {
        println!("{}", GREETING.cyan());
        println!(
            "{}",
            "Type a question, /assess <scenario>, /history or /quit.".dimmed()
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if text {
            print!("{} ", ">".green().bold());
            io::stdout().flush().map_err(|e| e.to_string())?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| AppError::from(e).to_string())?;
        let input = line.trim();

        match input {
            "/quit" | "/exit" => break,
            "/history" => {
                print_history(&session, format);
                continue;
            }
            _ => {}
        }

        if let Some(scenario) = input
            .strip_prefix(ASSESS_PREFIX)
            .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        {
            let scenario = scenario.trim();
            if scenario.is_empty() {
                continue;
            }
            if text {
                eprintln!("{}", "Performing HIRARC analysis...".dimmed());
            }
            let reply = match rt.block_on(assessments.respond(scenario)) {
                Ok(reply) => reply,
                Err(e) => {
                    skip_or_fail(e.into())?;
                    continue;
                }
            };
            if text {
                print_assessment(&reply.output, settings.max_remediations);
            } else {
                print_json(&reply);
            }
            continue;
        }

        // Blank lines never reach the resolver
        if !session.submit(input) {
            continue;
        }
        if text {
            eprintln!("{}", "Assistant is typing...".dimmed());
        }
        let reply = match rt.block_on(answers.respond(input)) {
            Ok(reply) => reply,
            Err(e) => {
                skip_or_fail(e.into())?;
                continue;
            }
        };
        session.reply(reply.output);

        if text {
            println!("{}", reply.output);
            println!();
        } else {
            print_json(&reply);
        }
    }

    Ok(())
}

/// Drop a reply that can be retried, otherwise stop the session.
fn skip_or_fail(err: AppError) -> Result<(), String> {
    if err.is_recoverable() {
        warn!("[chat] dropping reply: {err}");
        return Ok(());
    }
    Err(err.into())
}

fn print_history(session: &ChatSession, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_json(session);
        return;
    }
    for message in session.messages() {
        match message.role {
            Role::User => println!("{} {}", "you:".green().bold(), message.text),
            Role::Bot => println!("{} {}", "bot:".cyan().bold(), message.text),
        }
    }
}
