use crate::error::Result;
use crate::models::{GatewayDevice, Room};

/// Port for the persisted room collection.
///
/// Each adapter owns a single named slot holding the serialized collection.
/// Loads of a slot that was never written return an empty collection, never
/// an error; an unparseable slot fails with `StorageCorrupt`. Saves replace
/// the whole collection, so no partial overwrite is visible to a subsequent
/// load.
pub trait RoomStore: Send + Sync {
    /// Load the full room collection
    fn load_rooms(&self) -> Result<Vec<Room>>;

    /// Replace the full room collection
    fn save_rooms(&self, rooms: &[Room]) -> Result<()>;
}

/// Port for the persisted gateway-device collection. Same slot semantics as
/// `RoomStore`, on a slot disjoint from the room slot.
pub trait GatewayStore: Send + Sync {
    /// Load the full gateway collection
    fn load_gateways(&self) -> Result<Vec<GatewayDevice>>;

    /// Replace the full gateway collection
    fn save_gateways(&self, gateways: &[GatewayDevice]) -> Result<()>;
}
