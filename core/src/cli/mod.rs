pub mod commands;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "safety")]
#[command(author, version, about = "Workplace safety assistant and HIRARC risk assessment", long_about = None)]
pub struct Cli {
    /// Override the settings directory (default: ~/.safety/, env: SAFETY_HOME)
    #[arg(long, global = true)]
    pub home: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask the assistant a safety question
    Ask {
        /// The question (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Show which rule produced the answer
        #[arg(long)]
        explain: bool,
    },

    /// Assess the risk of a workplace scenario
    Assess {
        /// The scenario description (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        scenario: Vec<String>,

        /// Show every control measure instead of the configured maximum
        #[arg(long)]
        all: bool,
    },

    /// Start an interactive chat session (the default)
    Chat {
        /// Reply delay in milliseconds (overrides the settings file)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Browse the FAQ knowledge base
    Faq {
        /// Show only a specific topic (id or name)
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Show the answer and hazard rule tables
    Rules,

    /// Show sample questions and scenarios
    Samples,

    /// Show the effective settings and where they are read from
    Config {
        /// Write a settings file with default values if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Resolve a potentially relative path to an absolute one.
fn resolve_absolute(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
    Ok(cwd.join(path))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<(), String> {
    // Set SAFETY_HOME early so settings lookups use the override
    if let Some(home) = &cli.home {
        let absolute = resolve_absolute(Path::new(home))?;
        std::env::set_var("SAFETY_HOME", &absolute);
    }

    match cli.command {
        None => commands::chat::run(None, cli.format),
        Some(Commands::Ask { question, explain }) => {
            commands::ask::run(&question.join(" "), explain, cli.format)
        }
        Some(Commands::Assess { scenario, all }) => {
            commands::assess::run(&scenario.join(" "), all, cli.format)
        }
        Some(Commands::Chat { delay_ms }) => commands::chat::run(delay_ms, cli.format),
        Some(Commands::Faq { topic }) => commands::faq::run(topic.as_deref(), cli.format),
        Some(Commands::Rules) => commands::rules::run(cli.format),
        Some(Commands::Samples) => commands::samples::run(cli.format),
        Some(Commands::Config { init }) => commands::config::run(init, cli.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_joins_words() {
        let cli = Cli::parse_from(["safety", "ask", "how", "often", "--explain"]);
        match cli.command {
            Some(Commands::Ask { question, explain }) => {
                assert_eq!(question.join(" "), "how often");
                assert!(explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_format() {
        let cli = Cli::parse_from(["safety", "assess", "roof", "work", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["safety"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["safety", "ask"]).is_err());
    }
}
