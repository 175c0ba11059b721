//! Command implementations

mod gateways;
mod init;
mod rooms;
mod status;

use crate::cli::{Cli, Commands};
use crate::config_loader;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match cli.command {
        Commands::Init(args) => init::execute(args, &output),
        Commands::Rooms(args) => {
            let config = config_loader::resolve_config(cli.data_dir)?;
            rooms::execute(args, &output, &config)
        }
        Commands::Gateways(args) => {
            let config = config_loader::resolve_config(cli.data_dir)?;
            gateways::execute(args, &output, &config)
        }
        Commands::Status(args) => {
            let config = config_loader::resolve_config(cli.data_dir)?;
            status::execute(args, &output, &config)
        }
    }
}
