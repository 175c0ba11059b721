//! In-memory storage implementations for development and testing.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. For real installations, use the file backend.

use std::sync::{Arc, RwLock};

use wardtrace_core::error::Result;
use wardtrace_core::models::{GatewayDevice, Room};
use wardtrace_core::ports::{GatewayStore, RoomStore};

/// In-memory implementation of RoomStore
#[derive(Debug, Clone, Default)]
pub struct MemoryRoomStore {
    rooms: Arc<RwLock<Vec<Room>>>,
}

impl MemoryRoomStore {
    /// Create a new in-memory room store
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomStore for MemoryRoomStore {
    fn load_rooms(&self) -> Result<Vec<Room>> {
        let rooms = self.rooms.read().unwrap();
        Ok(rooms.clone())
    }

    fn save_rooms(&self, rooms: &[Room]) -> Result<()> {
        let mut slot = self.rooms.write().unwrap();
        *slot = rooms.to_vec();
        Ok(())
    }
}

/// In-memory implementation of GatewayStore
#[derive(Debug, Clone, Default)]
pub struct MemoryGatewayStore {
    gateways: Arc<RwLock<Vec<GatewayDevice>>>,
}

impl MemoryGatewayStore {
    /// Create a new in-memory gateway store
    pub fn new() -> Self {
        Self::default()
    }
}

impl GatewayStore for MemoryGatewayStore {
    fn load_gateways(&self) -> Result<Vec<GatewayDevice>> {
        let gateways = self.gateways.read().unwrap();
        Ok(gateways.clone())
    }

    fn save_gateways(&self, gateways: &[GatewayDevice]) -> Result<()> {
        let mut slot = self.gateways.write().unwrap();
        *slot = gateways.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wardtrace_core::models::{Point, RoomId};

    fn create_test_room(name: &str) -> Room {
        Room {
            id: RoomId::new(),
            name: name.to_string(),
            floor_plan_name: "Ward B".to_string(),
            floor_plan_width_meters: 10.0,
            floor_plan_height_meters: 5.0,
            image_ref: "data:image/png;base64,xyz".to_string(),
            canvas_width_px: 500,
            canvas_height_px: 250,
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
            ],
            gateway: None,
            distance_to_gateway: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_load_empty_store() {
        let store = MemoryRoomStore::new();
        assert!(store.load_rooms().unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_whole_collection() {
        let store = MemoryRoomStore::new();

        store.save_rooms(&[create_test_room("ICU-1"), create_test_room("ICU-2")]).unwrap();
        assert_eq!(store.load_rooms().unwrap().len(), 2);

        store.save_rooms(&[create_test_room("Ward-A")]).unwrap();
        let rooms = store.load_rooms().unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name, "Ward-A");
    }

    #[test]
    fn test_save_reload_roundtrip_preserves_points() {
        let store = MemoryRoomStore::new();
        let room = create_test_room("ICU-1");

        store.save_rooms(std::slice::from_ref(&room)).unwrap();
        let loaded = store.load_rooms().unwrap();
        assert_eq!(loaded[0].points, room.points);
    }
}
