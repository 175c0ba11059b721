//! Wardtrace CLI - Command-line interface
//!
//! This is the operational adapter for the wardtrace collections: inspect,
//! import, and prune room and gateway records from a terminal.

mod cli;
mod commands;
mod config_loader;
mod errors;
mod output;
mod output_types;
mod storage;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments and execute the command
    let cli = Cli::parse();
    commands::execute(cli)
}
