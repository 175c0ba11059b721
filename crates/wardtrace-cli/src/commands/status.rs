//! Status command implementation

use crate::cli::StatusArgs;
use crate::config_loader;
use crate::output::OutputWriter;
use crate::output_types::StatusOutput;
use crate::storage::Storage;
use anyhow::Result;

use wardtrace_core::config::LayeredConfig;
use wardtrace_rooms::{GatewayRegistry, RoomManager};

pub fn execute(args: StatusArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let data_dir = &config.data_dir.value;
    let storage = Storage::new(data_dir);

    let manager = RoomManager::load(storage.rooms.clone(), config_loader::thresholds(config))?;
    let registry = GatewayRegistry::load(storage.gateways.clone())?;

    if output.is_json() {
        let json_output = StatusOutput {
            data_dir: data_dir.display().to_string(),
            room_count: manager.rooms().len(),
            gateway_count: registry.gateways().len(),
            rooms_recovered_from_corrupt: manager.recovered_from_corrupt(),
            gateways_recovered_from_corrupt: registry.recovered_from_corrupt(),
        };
        output.result(json_output)?;
    } else {
        output.section("Collections");
        output.kv("Data Directory", data_dir.display());
        output.kv("Rooms", manager.rooms().len());
        output.kv("Gateways", registry.gateways().len());

        if manager.recovered_from_corrupt() {
            output.warning("Room slot was corrupt; the collection reads as empty");
        }
        if registry.recovered_from_corrupt() {
            output.warning("Gateway slot was corrupt; the collection reads as empty");
        }

        if args.verbose {
            output.section("Configuration");
            let map = config.to_inspection_map();
            let mut keys: Vec<_> = map.keys().collect();
            keys.sort();
            for key in keys {
                let (value, source) = &map[key];
                output.kv(key, format!("{} (from {:?})", value, source));
            }
        }
    }

    Ok(())
}
