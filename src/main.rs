//! charforge - Entry Point
//!
//! Loads configuration and the rules/catalog tables once, then dispatches
//! the requested subcommand.

use std::process::ExitCode;

use charforge::cli::{self, Cli, Tables};
use charforge::core::config::{BuilderConfig, DEFAULT_CONFIG_FILE};
use charforge::core::error::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Usage errors exit with 2 from clap
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = BuilderConfig::locate(cli.config.as_deref());
    let config = BuilderConfig::from_source(source.as_deref())?;

    // RUST_LOG wins over the configured filter; logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &source {
        Some(path) => tracing::debug!("Loaded config from {}", path.display()),
        None => tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE),
    }
    tracing::debug!("Config: {:?}", config);

    let tables = Tables::load(&config)?;
    cli::run(cli.command, &config, &tables)
}
