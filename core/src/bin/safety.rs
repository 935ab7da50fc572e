//! safety binary - workplace safety assistant CLI.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default: warn).

use clap::Parser;
use safety::cli::{run, Cli};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
