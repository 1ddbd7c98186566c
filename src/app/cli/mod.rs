//! CLI Adapter.

use crate::domain::{AppError, BackendConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "focuscoach")]
#[command(version)]
#[command(
    about = "Ask a local Ollama model for a focus-session pep talk (smoke test)",
    long_about = "Renders the focus prompt for a fixed session (25 minutes, calm vibe, \
                  10 minutes in, 1 cheat event) and prints the model's reply. \
                  Expects Ollama at http://localhost:11434 with gemma:2b pulled."
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();

    let result: Result<(), AppError> = run_smoke();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_smoke() -> Result<(), AppError> {
    let config = BackendConfig::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    // Generation failures are already reported on stdout and still exit 0.
    crate::app::api::smoke_test(&config, &mut out)?;
    Ok(())
}
