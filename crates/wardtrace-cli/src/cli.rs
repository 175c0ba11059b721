use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wardtrace - Room outlines and gateway calibration for indoor tracking
#[derive(Parser, Debug)]
#[command(name = "wardtrace")]
#[command(about = "Room outlines and gateway calibration for indoor tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Data directory holding the persisted slots (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a wardtrace data directory
    Init(InitArgs),

    /// Manage saved rooms
    Rooms(RoomsArgs),

    /// Manage registered gateway devices
    Gateways(GatewaysArgs),

    /// Show collection counts and configuration
    Status(StatusArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Force overwrite if a data directory already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Subcommand, Debug)]
pub enum RoomsCommand {
    /// List saved rooms
    List(RoomsListArgs),

    /// Show one room in full
    Show(RoomsShowArgs),

    /// Import a completed outline draft and save it as a room
    Add(RoomsAddArgs),

    /// Delete a room by id
    Delete(RoomsDeleteArgs),
}

#[derive(Parser, Debug)]
pub struct RoomsListArgs {
    /// Only rooms drawn against this floor plan (exact name match)
    #[arg(long)]
    pub floor_plan: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RoomsShowArgs {
    /// Room id
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct RoomsAddArgs {
    /// Path to a JSON draft file: name, floor_plan, points, optional gateway
    pub draft: PathBuf,
}

#[derive(Parser, Debug)]
pub struct RoomsDeleteArgs {
    /// Room id
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct GatewaysArgs {
    #[command(subcommand)]
    pub command: GatewaysCommand,
}

#[derive(Subcommand, Debug)]
pub enum GatewaysCommand {
    /// List registered gateways
    List,

    /// Register a gateway
    Add(GatewaysAddArgs),

    /// Remove a gateway by id
    Remove(GatewaysRemoveArgs),
}

#[derive(Parser, Debug)]
pub struct GatewaysAddArgs {
    /// Gateway name
    #[arg(long)]
    pub name: String,

    /// Hardware model (G1 or G2)
    #[arg(long)]
    pub model: String,

    /// MAC address, AA:BB:CC:DD:EE:FF form
    #[arg(long)]
    pub mac: String,
}

#[derive(Parser, Debug)]
pub struct GatewaysRemoveArgs {
    /// Gateway id
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Show configuration values and where each came from
    #[arg(long)]
    pub verbose: bool,
}
