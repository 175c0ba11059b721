//! JSON-file slot storage.
//!
//! One file per slot inside a data directory: `rooms.json` and
//! `gateways.json`. Each slot holds the serialized array of the whole
//! collection. Writes land in a temp file that is renamed over the slot, so
//! a reader never observes a partially written collection.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use wardtrace_core::error::{Result, WardtraceError};
use wardtrace_core::models::{GatewayDevice, Room};
use wardtrace_core::ports::{GatewayStore, RoomStore};

const ROOMS_SLOT: &str = "rooms";
const GATEWAYS_SLOT: &str = "gateways";

/// File-backed implementation of the storage ports
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `data_dir`. The directory is created on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", slot))
    }

    fn load_slot<T: DeserializeOwned>(&self, slot: &str) -> Result<Vec<T>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| WardtraceError::StorageCorrupt {
            slot: slot.to_string(),
            reason: e.to_string(),
        })
    }

    fn save_slot<T: Serialize>(&self, slot: &str, items: &[T]) -> Result<()> {
        let content = serde_json::to_string_pretty(items)
            .map_err(|e| WardtraceError::Serialization(e.to_string()))?;

        fs::create_dir_all(&self.data_dir).map_err(|e| WardtraceError::StorageWrite {
            slot: slot.to_string(),
            reason: format!("Failed to create data directory: {}", e),
        })?;

        let path = self.slot_path(slot);
        let tmp = self.data_dir.join(format!("{}.json.tmp", slot));

        fs::write(&tmp, content).map_err(|e| WardtraceError::StorageWrite {
            slot: slot.to_string(),
            reason: e.to_string(),
        })?;

        fs::rename(&tmp, &path).map_err(|e| WardtraceError::StorageWrite {
            slot: slot.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(slot, path = %path.display(), count = items.len(), "slot written");
        Ok(())
    }
}

impl RoomStore for FileStore {
    fn load_rooms(&self) -> Result<Vec<Room>> {
        self.load_slot(ROOMS_SLOT)
    }

    fn save_rooms(&self, rooms: &[Room]) -> Result<()> {
        self.save_slot(ROOMS_SLOT, rooms)
    }
}

impl GatewayStore for FileStore {
    fn load_gateways(&self) -> Result<Vec<GatewayDevice>> {
        self.load_slot(GATEWAYS_SLOT)
    }

    fn save_gateways(&self, gateways: &[GatewayDevice]) -> Result<()> {
        self.save_slot(GATEWAYS_SLOT, gateways)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wardtrace_core::models::{GatewayId, GatewayModel, GatewayStatus, Point, RoomId};

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

    fn create_test_gateway(name: &str) -> GatewayDevice {
        GatewayDevice {
            id: GatewayId::new(),
            name: name.to_string(),
            model: GatewayModel::G1,
            mac_address: "AC:23:3F:C0:CC:BB".to_string(),
            status: GatewayStatus::Connected,
            last_seen: Utc::now(),
        }
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.load_rooms().unwrap().is_empty());
        assert!(store.load_gateways().unwrap().is_empty());
    }

    #[test]
    fn test_save_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let room = create_test_room("ICU-1");

        store.save_rooms(std::slice::from_ref(&room)).unwrap();
        let loaded = store.load_rooms().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], room);
    }

    #[test]
    fn test_corrupt_slot_fails_with_storage_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join("rooms.json"), "{not json").unwrap();

        let err = store.load_rooms().unwrap_err();
        assert!(matches!(err, WardtraceError::StorageCorrupt { ref slot, .. } if slot == "rooms"));
    }

    #[test]
    fn test_slots_are_disjoint() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.save_rooms(&[create_test_room("ICU-1")]).unwrap();
        store.save_gateways(&[create_test_gateway("GW-1")]).unwrap();

        assert_eq!(store.load_rooms().unwrap().len(), 1);
        assert_eq!(store.load_gateways().unwrap().len(), 1);

        // Replacing one slot leaves the other untouched.
        store.save_rooms(&[]).unwrap();
        assert!(store.load_rooms().unwrap().is_empty());
        assert_eq!(store.load_gateways().unwrap().len(), 1);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.save_rooms(&[create_test_room("ICU-1")]).unwrap();
        assert!(!dir.path().join("rooms.json.tmp").exists());
    }
}
