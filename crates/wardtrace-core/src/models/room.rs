use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::floor_plan::FloorPlan;
use super::geometry::Point;

/// Unique identifier for a room. Assigned once at first save, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for RoomId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A positioning gateway placed on the same canvas as a room's outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayMarker {
    /// Canvas-pixel x coordinate
    pub x: f64,

    /// Canvas-pixel y coordinate
    pub y: f64,

    /// Gateway label
    pub name: String,
}

impl GatewayMarker {
    pub fn new(x: f64, y: f64, name: impl Into<String>) -> Self {
        Self { x, y, name: name.into() }
    }

    /// Marker position as a canvas point
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A persisted room record.
///
/// Floor-plan metadata is copied in at save time. Editing a floor plan later
/// does not retroactively update rooms saved against it, which keeps
/// historical gateway distances stable even if the live canvas resizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier, stable across edits
    pub id: RoomId,

    /// User-facing label
    pub name: String,

    /// Name of the floor plan the outline was drawn against
    pub floor_plan_name: String,

    /// Real-world floor-plan width in meters
    pub floor_plan_width_meters: f64,

    /// Real-world floor-plan height in meters
    pub floor_plan_height_meters: f64,

    /// Opaque floor-plan image reference
    pub image_ref: String,

    /// Canvas width in pixels at draw time
    pub canvas_width_px: u32,

    /// Canvas height in pixels at draw time
    pub canvas_height_px: u32,

    /// Completed outline in insertion order. The closing edge from the last
    /// point back to the first is implied, never stored as a duplicate.
    pub points: Vec<Point>,

    /// Gateway placed on this room's canvas, if any
    pub gateway: Option<GatewayMarker>,

    /// Meters from the outline centroid to the gateway. Present iff
    /// `gateway` is present; recomputed whenever points or gateway change.
    pub distance_to_gateway: Option<f64>,

    /// When the room was first saved
    pub created_at: DateTime<Utc>,

    /// When the room was last saved
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// The floor-plan metadata denormalized onto this room
    pub fn floor_plan(&self) -> FloorPlan {
        FloorPlan {
            name: self.floor_plan_name.clone(),
            image_ref: self.image_ref.clone(),
            width_meters: self.floor_plan_width_meters,
            height_meters: self.floor_plan_height_meters,
            canvas_width_px: self.canvas_width_px,
            canvas_height_px: self.canvas_height_px,
        }
    }
}
