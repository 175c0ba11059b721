//! Gateways command implementation

use crate::cli::{GatewaysAddArgs, GatewaysArgs, GatewaysCommand, GatewaysRemoveArgs};
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::GatewayRow;
use crate::storage::Storage;
use anyhow::Result;

use wardtrace_core::config::LayeredConfig;
use wardtrace_core::models::{GatewayId, GatewayModel};
use wardtrace_rooms::GatewayRegistry;

pub fn execute(args: GatewaysArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let storage = Storage::new(&config.data_dir.value);
    let mut registry = GatewayRegistry::load(storage.gateways.clone())?;

    if registry.recovered_from_corrupt() {
        output.warning("Gateway data was corrupt and has been reset to an empty collection");
    }

    match args.command {
        GatewaysCommand::List => list(output, &registry),
        GatewaysCommand::Add(args) => add(args, output, &mut registry),
        GatewaysCommand::Remove(args) => remove(args, output, &mut registry),
    }
}

fn list(output: &OutputWriter, registry: &GatewayRegistry) -> Result<()> {
    let rows: Vec<GatewayRow> = registry.gateways().iter().map(GatewayRow::from).collect();
    output.table(rows);
    Ok(())
}

fn add(args: GatewaysAddArgs, output: &OutputWriter, registry: &mut GatewayRegistry) -> Result<()> {
    let model: GatewayModel = args.model.parse()?;
    let device = registry.add(&args.name, model, &args.mac)?;

    if output.is_json() {
        output.result(device)?;
    } else {
        output.success(format!("Registered gateway '{}' ({})", device.name, device.id));
    }
    Ok(())
}

fn remove(
    args: GatewaysRemoveArgs,
    output: &OutputWriter,
    registry: &mut GatewayRegistry,
) -> Result<()> {
    let id: GatewayId = args.id.parse().map_err(|_| errors::invalid_id(&args.id))?;

    if registry.get(id).is_none() {
        output.info(format!("No gateway with id {}; nothing to remove", id));
        return Ok(());
    }

    registry.remove(id)?;
    output.success(format!("Removed gateway {}", id));
    Ok(())
}
