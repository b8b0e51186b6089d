//! Review Sentiment Explorer: binary entrypoint.
//! Resolves config, loads the review table and runs the interactive menu on
//! stdin/stdout. Load and config failures exit with code 1.

use std::io;
use std::process::ExitCode;

use review_sentiment_explorer::{app, config::AppConfig, logging};
use tracing::error;

fn main() -> ExitCode {
    // Load .env when present; silently skipped otherwise.
    let _ = dotenvy::dotenv();
    logging::init();

    let cfg = match AppConfig::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %format!("{e:#}"), "configuration failed");
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match app::run(&cfg, stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "startup failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
