//! Fleet CLI - manage devices, applications and their variables

use std::process::ExitCode;

use clap::Parser;
use fleet_cli::cli::Cli;
use fleet_cli::domain::EnvError;
use fleet_cli::output::json;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FLEET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn error_code(e: &anyhow::Error) -> &'static str {
    match e.downcast_ref::<EnvError>() {
        Some(EnvError::NotLoggedIn { .. }) => "NOT_LOGGED_IN",
        Some(EnvError::InvalidId(_) | EnvError::EmptyIdList) => "INVALID_ARGUMENT",
        None => "ERROR",
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            match json_mode.then(|| json::format_error(&format!("{e:#}"), error_code(&e))) {
                Some(Ok(obj)) => println!("{obj}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
