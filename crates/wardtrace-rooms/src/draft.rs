//! Draft room lifecycle.
//!
//! A draft is the transient side of a room: the floor-plan snapshot it is
//! drawn against, the outline editor, and the not-yet-validated name and
//! gateway. Nothing is durable until the manager saves it.

use wardtrace_core::models::{FloorPlan, GatewayMarker, Point, Room, RoomId};
use wardtrace_editor::{Clock, EditorThresholds, OutlineEditor, SystemClock};

/// An unsaved room being assembled against a floor plan
#[derive(Debug)]
pub struct RoomDraft<C: Clock = SystemClock> {
    /// Floor-plan metadata captured when the draft began
    pub floor_plan: FloorPlan,

    /// Outline editor for the room's corners
    pub outline: OutlineEditor<C>,

    name: Option<String>,
    gateway: Option<GatewayMarker>,
    existing_id: Option<RoomId>,
}

impl RoomDraft<SystemClock> {
    /// Fresh draft bound to a floor plan; the outline starts idle
    pub fn new(floor_plan: FloorPlan, thresholds: EditorThresholds) -> Self {
        Self::with_clock(floor_plan, thresholds, SystemClock::new())
    }

    /// Draft seeded from a saved room, for editing. The outline adopts the
    /// room's completed corners; call `outline.edit(..)` to redraw them.
    pub fn from_room(room: &Room, thresholds: EditorThresholds) -> Self {
        Self::from_room_with_clock(room, thresholds, SystemClock::new())
    }
}

impl<C: Clock> RoomDraft<C> {
    /// Fresh draft with an injected clock for the outline editor
    pub fn with_clock(floor_plan: FloorPlan, thresholds: EditorThresholds, clock: C) -> Self {
        Self {
            floor_plan,
            outline: OutlineEditor::with_clock(thresholds, clock),
            name: None,
            gateway: None,
            existing_id: None,
        }
    }

    /// Draft seeded from a saved room, with an injected clock
    pub fn from_room_with_clock(room: &Room, thresholds: EditorThresholds, clock: C) -> Self {
        let mut outline = OutlineEditor::with_clock(thresholds, clock);
        outline.load_complete(room.points.clone());
        Self {
            floor_plan: room.floor_plan(),
            outline,
            name: Some(room.name.clone()),
            gateway: room.gateway.clone(),
            existing_id: Some(room.id),
        }
    }

    /// The room name entered so far
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name the room. The flow prompts for a name once the outline closes;
    /// saving rejects drafts that are still unnamed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The gateway placed on this draft's canvas, if any
    pub fn gateway(&self) -> Option<&GatewayMarker> {
        self.gateway.as_ref()
    }

    /// Place the optional gateway marker. For new rooms this is a second
    /// drawing pass after naming; placing again replaces the marker.
    pub fn place_gateway(&mut self, at: Point, name: impl Into<String>) {
        self.gateway = Some(GatewayMarker::new(at.x, at.y, name));
    }

    /// Remove the gateway marker
    pub fn clear_gateway(&mut self) {
        self.gateway = None;
    }

    /// Id of the room this draft edits, if it is not a new one
    pub fn existing_id(&self) -> Option<RoomId> {
        self.existing_id
    }
}
