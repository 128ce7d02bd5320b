//! tessel: command-line front end for the grid layout engine.
//!
//! Reads a JSON layout, applies one engine operation and prints the
//! resulting layout as JSON on stdout. Logs go to stderr.

mod cli;
mod commands;

use std::process::ExitCode;

use tessel_common::TesselError;
use tessel_config::TesselConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// `--log-level` wins over `RUST_LOG`, which wins over the config file.
fn init_logging(log_level: Option<&str>, config: Option<&TesselConfig>) {
    let configured = config.map_or("info", |config| config.logging.level.directive());
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(configured)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = tessel_config::load_config(args.config.as_deref());
    init_logging(args.log_level.as_deref(), config.as_ref().ok());

    let result = config
        .map_err(TesselError::from)
        .and_then(|config| commands::run(&args.command, &config));

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
