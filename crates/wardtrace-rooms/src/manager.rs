//! Room record manager.
//!
//! Owns the room collection as an in-memory cache over an injected store.
//! Reads come from the cache; every mutation persists the full collection
//! first and touches the cache only after the write succeeded, so a failed
//! write leaves memory unchanged and the user can retry.

use std::sync::Arc;

use chrono::Utc;

use wardtrace_core::error::{Result, WardtraceError};
use wardtrace_core::models::{FloorPlan, Point, Room, RoomId};
use wardtrace_core::ports::RoomStore;
use wardtrace_editor::{Clock, EditorThresholds};
use wardtrace_geo::calibrate::{compute_scale, gateway_distance};
use wardtrace_geo::locate::outline_contains;

use crate::draft::RoomDraft;

pub struct RoomManager {
    store: Arc<dyn RoomStore>,
    rooms: Vec<Room>,
    thresholds: EditorThresholds,
    recovered: bool,
}

impl RoomManager {
    /// Manager over a store, starting from the persisted collection.
    ///
    /// A corrupt room slot is not fatal: the collection starts empty, a
    /// warning is logged, and `recovered_from_corrupt` reports the condition
    /// so a surface can tell the user. The next successful save overwrites
    /// the corrupt slot. IO failures still propagate.
    pub fn load(store: Arc<dyn RoomStore>, thresholds: EditorThresholds) -> Result<Self> {
        let (rooms, recovered) = match store.load_rooms() {
            Ok(rooms) => (rooms, false),
            Err(WardtraceError::StorageCorrupt { slot, reason }) => {
                tracing::warn!(slot, reason, "room slot corrupt; treating collection as empty");
                (Vec::new(), true)
            }
            Err(e) => return Err(e),
        };

        Ok(Self { store, rooms, thresholds, recovered })
    }

    /// Whether the last load found a corrupt slot and fell back to empty
    pub fn recovered_from_corrupt(&self) -> bool {
        self.recovered
    }

    /// All rooms, in insertion order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room by id
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Rooms drawn against the named floor plan (exact match)
    pub fn list_by_floor_plan(&self, floor_plan_name: &str) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.floor_plan_name == floor_plan_name).collect()
    }

    /// First room whose outline contains the canvas point
    pub fn room_at(&self, point: Point) -> Option<&Room> {
        self.rooms.iter().find(|r| outline_contains(&r.points, point))
    }

    /// Begin a new unsaved room against a floor plan; the outline starts idle
    pub fn create_draft(&self, floor_plan: FloorPlan) -> RoomDraft {
        RoomDraft::new(floor_plan, self.thresholds)
    }

    /// Begin editing an existing room
    pub fn edit_draft(&self, id: RoomId) -> Result<RoomDraft> {
        let room = self
            .get(id)
            .ok_or_else(|| WardtraceError::RoomNotFound { id: id.to_string() })?;
        Ok(RoomDraft::from_room(room, self.thresholds))
    }

    /// Validate a draft and persist it as a room.
    ///
    /// Checks run in the order the form fills in: name, floor-plan name,
    /// floor-plan dimensions, then the outline. The first unmet precondition
    /// fails the save; nothing is written until all pass. Gateway distance
    /// is recomputed here on every save, never carried over.
    pub fn save<C: Clock>(&mut self, draft: &RoomDraft<C>) -> Result<Room> {
        let name = draft.name().unwrap_or("");
        if name.trim().is_empty() {
            return Err(WardtraceError::Validation {
                field: "name".to_string(),
                reason: "room name must not be empty".to_string(),
            });
        }

        if draft.floor_plan.name.trim().is_empty() {
            return Err(WardtraceError::Validation {
                field: "floor_plan_name".to_string(),
                reason: "floor plan name must not be empty".to_string(),
            });
        }

        if draft.floor_plan.width_meters <= 0.0 {
            return Err(WardtraceError::Validation {
                field: "width_meters".to_string(),
                reason: format!("must be positive, got {}", draft.floor_plan.width_meters),
            });
        }

        if draft.floor_plan.height_meters <= 0.0 {
            return Err(WardtraceError::Validation {
                field: "height_meters".to_string(),
                reason: format!("must be positive, got {}", draft.floor_plan.height_meters),
            });
        }

        // Meter dimensions were checked above, so this only rejects
        // zero-pixel canvases.
        compute_scale(&draft.floor_plan)?;

        let points = draft.outline.completed_points().ok_or_else(|| {
            WardtraceError::Validation {
                field: "points".to_string(),
                reason: "room outline must be completed before saving".to_string(),
            }
        })?;

        if points.len() < 3 {
            return Err(WardtraceError::Validation {
                field: "points".to_string(),
                reason: format!("room outline needs at least 3 corners, got {}", points.len()),
            });
        }

        let now = Utc::now();
        let existing = draft.existing_id().and_then(|id| self.get(id));
        let id = draft.existing_id().unwrap_or_else(RoomId::new);
        let created_at = existing.map(|r| r.created_at).unwrap_or(now);

        let mut room = Room {
            id,
            name: name.to_string(),
            floor_plan_name: draft.floor_plan.name.clone(),
            floor_plan_width_meters: draft.floor_plan.width_meters,
            floor_plan_height_meters: draft.floor_plan.height_meters,
            image_ref: draft.floor_plan.image_ref.clone(),
            canvas_width_px: draft.floor_plan.canvas_width_px,
            canvas_height_px: draft.floor_plan.canvas_height_px,
            points: points.to_vec(),
            gateway: draft.gateway().cloned(),
            distance_to_gateway: None,
            created_at,
            updated_at: now,
        };
        room.distance_to_gateway = gateway_distance(&room);

        let mut next = self.rooms.clone();
        match next.iter().position(|r| r.id == room.id) {
            Some(i) => next[i] = room.clone(),
            None => next.push(room.clone()),
        }
        self.store.save_rooms(&next)?;
        self.rooms = next;

        tracing::info!(id = %room.id, name = %room.name, "room saved");
        Ok(room)
    }

    /// Remove a room by id and persist the shrunken collection. Removing an
    /// absent id is a no-op, not an error.
    pub fn delete(&mut self, id: RoomId) -> Result<()> {
        if !self.rooms.iter().any(|r| r.id == id) {
            return Ok(());
        }

        let next: Vec<Room> = self.rooms.iter().filter(|r| r.id != id).cloned().collect();
        self.store.save_rooms(&next)?;
        self.rooms = next;

        tracing::info!(%id, "room deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wardtrace_editor::ManualClock;
    use wardtrace_store::MemoryRoomStore;

    fn test_plan() -> FloorPlan {
        FloorPlan::new("Ward B", "data:image/png;base64,xyz", 10.0, 5.0, 500, 250)
    }

    fn square_draft(clock: &ManualClock) -> RoomDraft<ManualClock> {
        let mut draft =
            RoomDraft::with_clock(test_plan(), EditorThresholds::default(), clock.clone());
        draft.outline.start();
        for p in [(50.0, 50.0), (150.0, 50.0), (150.0, 150.0), (50.0, 150.0)] {
            draft.outline.click(Point::new(p.0, p.1));
            clock.advance(Duration::from_millis(500));
        }
        draft.outline.click(Point::new(60.0, 60.0));
        assert!(draft.outline.is_complete());
        draft
    }

    fn manager() -> RoomManager {
        RoomManager::load(Arc::new(MemoryRoomStore::new()), EditorThresholds::default()).unwrap()
    }

    #[test]
    fn test_save_requires_name() {
        let mut mgr = manager();
        let clock = ManualClock::new();
        let draft = square_draft(&clock);

        let err = mgr.save(&draft).unwrap_err();
        assert!(matches!(err, WardtraceError::Validation { ref field, .. } if field == "name"));
        assert!(mgr.rooms().is_empty());
    }

    #[test]
    fn test_save_requires_completed_outline() {
        let mut mgr = manager();
        let mut draft = mgr.create_draft(test_plan());
        draft.set_name("ICU-1");
        draft.outline.start();
        draft.outline.click(Point::new(0.0, 0.0));

        let err = mgr.save(&draft).unwrap_err();
        assert!(matches!(err, WardtraceError::Validation { ref field, .. } if field == "points"));
    }

    #[test]
    fn test_save_assigns_id_and_computes_distance() {
        let mut mgr = manager();
        let clock = ManualClock::new();
        let mut draft = square_draft(&clock);
        draft.set_name("ICU-1");
        // Centroid is (100,100); 150px east at 0.02 m/px is 3 meters.
        draft.place_gateway(Point::new(250.0, 100.0), "GW-1");

        let room = mgr.save(&draft).unwrap();
        assert_eq!(room.name, "ICU-1");
        assert!((room.distance_to_gateway.unwrap() - 3.0).abs() < 1e-10);
        assert_eq!(mgr.rooms().len(), 1);
    }

    #[test]
    fn test_edit_keeps_id_and_recomputes_distance() {
        let mut mgr = manager();
        let clock = ManualClock::new();
        let mut draft = square_draft(&clock);
        draft.set_name("ICU-1");
        draft.place_gateway(Point::new(250.0, 100.0), "GW-1");
        let saved = mgr.save(&draft).unwrap();

        // Double the pixel offset along x: distance doubles under the
        // stored scale.
        let mut edit = mgr.edit_draft(saved.id).unwrap();
        edit.place_gateway(Point::new(400.0, 100.0), "GW-1");
        let updated = mgr.save(&edit).unwrap();

        assert_eq!(updated.id, saved.id);
        assert!((updated.distance_to_gateway.unwrap() - 6.0).abs() < 1e-10);
        assert_eq!(mgr.rooms().len(), 1);
        assert_eq!(updated.created_at, saved.created_at);
    }

    #[test]
    fn test_distance_defined_iff_gateway() {
        let mut mgr = manager();
        let clock = ManualClock::new();
        let mut draft = square_draft(&clock);
        draft.set_name("ICU-1");
        let room = mgr.save(&draft).unwrap();
        assert!(room.gateway.is_none());
        assert!(room.distance_to_gateway.is_none());

        let mut edit = mgr.edit_draft(room.id).unwrap();
        edit.place_gateway(Point::new(250.0, 100.0), "GW-1");
        let updated = mgr.save(&edit).unwrap();
        assert!(updated.gateway.is_some());
        assert!(updated.distance_to_gateway.is_some());
    }

    #[test]
    fn test_delete_is_set_semantics() {
        let mut mgr = manager();
        let clock = ManualClock::new();
        let mut draft = square_draft(&clock);
        draft.set_name("ICU-1");
        let room = mgr.save(&draft).unwrap();

        mgr.delete(room.id).unwrap();
        assert!(mgr.rooms().is_empty());
        assert!(mgr.get(room.id).is_none());

        // Deleting again is a no-op, not an error.
        mgr.delete(room.id).unwrap();
    }

    #[test]
    fn test_list_by_floor_plan_is_exact_match() {
        let mut mgr = manager();
        let clock = ManualClock::new();
        let mut draft = square_draft(&clock);
        draft.set_name("ICU-1");
        mgr.save(&draft).unwrap();

        assert_eq!(mgr.list_by_floor_plan("Ward B").len(), 1);
        assert!(mgr.list_by_floor_plan("Ward").is_empty());
        assert!(mgr.list_by_floor_plan("ward b").is_empty());
    }

    #[test]
    fn test_room_at_locates_containing_room() {
        let mut mgr = manager();
        let clock = ManualClock::new();
        let mut draft = square_draft(&clock);
        draft.set_name("ICU-1");
        let room = mgr.save(&draft).unwrap();

        assert_eq!(mgr.room_at(Point::new(100.0, 100.0)).unwrap().id, room.id);
        assert!(mgr.room_at(Point::new(300.0, 300.0)).is_none());
    }
}
