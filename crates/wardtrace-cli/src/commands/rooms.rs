//! Rooms command implementation

use crate::cli::{RoomsAddArgs, RoomsArgs, RoomsCommand, RoomsDeleteArgs, RoomsListArgs, RoomsShowArgs};
use crate::config_loader;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::RoomRow;
use crate::storage::Storage;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use wardtrace_core::config::LayeredConfig;
use wardtrace_core::models::{FloorPlan, GatewayMarker, Point, RoomId};
use wardtrace_rooms::RoomManager;

pub fn execute(args: RoomsArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let storage = Storage::new(&config.data_dir.value);
    let mut manager =
        RoomManager::load(storage.rooms.clone(), config_loader::thresholds(config))?;

    if manager.recovered_from_corrupt() {
        output.warning("Room data was corrupt and has been reset to an empty collection");
    }

    match args.command {
        RoomsCommand::List(args) => list(args, output, &manager),
        RoomsCommand::Show(args) => show(args, output, &manager),
        RoomsCommand::Add(args) => add(args, output, &mut manager),
        RoomsCommand::Delete(args) => delete(args, output, &mut manager),
    }
}

fn list(args: RoomsListArgs, output: &OutputWriter, manager: &RoomManager) -> Result<()> {
    let rows: Vec<RoomRow> = match &args.floor_plan {
        Some(name) => manager.list_by_floor_plan(name).into_iter().map(RoomRow::from).collect(),
        None => manager.rooms().iter().map(RoomRow::from).collect(),
    };

    output.table(rows);
    Ok(())
}

fn show(args: RoomsShowArgs, output: &OutputWriter, manager: &RoomManager) -> Result<()> {
    let id: RoomId = args.id.parse().map_err(|_| errors::invalid_id(&args.id))?;
    let room = manager.get(id).ok_or_else(|| errors::room_not_found(&args.id))?;
    output.result(room.clone())?;
    Ok(())
}

/// On-disk draft: a completed outline plus naming and an optional gateway
#[derive(Debug, Deserialize)]
struct DraftFile {
    name: String,
    floor_plan: FloorPlan,
    points: Vec<Point>,
    gateway: Option<GatewayMarker>,
}

fn add(args: RoomsAddArgs, output: &OutputWriter, manager: &mut RoomManager) -> Result<()> {
    let path = args.draft.display().to_string();
    let content = fs::read_to_string(&args.draft)
        .with_context(|| format!("Failed to read draft file {}", path))?;
    let draft_file: DraftFile =
        serde_json::from_str(&content).map_err(|e| errors::invalid_draft(&path, &e.to_string()))?;

    let mut draft = manager.create_draft(draft_file.floor_plan);
    draft.outline.load_complete(draft_file.points);
    draft.set_name(draft_file.name);
    if let Some(gateway) = draft_file.gateway {
        draft.place_gateway(Point::new(gateway.x, gateway.y), gateway.name);
    }

    let room = manager.save(&draft)?;

    if output.is_json() {
        output.result(room)?;
    } else {
        output.success(format!("Saved room '{}' ({})", room.name, room.id));
        if let Some(distance) = room.distance_to_gateway {
            output.kv("Gateway distance", format!("{:.2} m", distance));
        }
    }
    Ok(())
}

fn delete(args: RoomsDeleteArgs, output: &OutputWriter, manager: &mut RoomManager) -> Result<()> {
    let id: RoomId = args.id.parse().map_err(|_| errors::invalid_id(&args.id))?;

    if manager.get(id).is_none() {
        output.info(format!("No room with id {}; nothing to delete", id));
        return Ok(());
    }

    manager.delete(id)?;
    output.success(format!("Deleted room {}", id));
    Ok(())
}
