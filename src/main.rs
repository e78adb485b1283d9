//! XForce Leaderboard - Entry Point
//!
//! Operator console for the TSO sales leaderboard.

use log::{error, info};
use std::process::ExitCode;

use xforce_leaderboard::{App, AppConfig, console};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching leaderboard console...");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut app = match App::open(config) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to open storage: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = console::run(&mut app, tokio::io::stdin(), tokio::io::stdout()).await {
        error!("Console I/O failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
