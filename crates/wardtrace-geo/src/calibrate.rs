use wardtrace_core::error::{Result, WardtraceError};
use wardtrace_core::models::{FloorPlan, Room};

use crate::primitives::{meters_distance, vertex_centroid};

/// Meters-per-pixel conversion factors, one per axis.
///
/// The two axes are calibrated independently; floor-plan canvases are not
/// assumed to have square pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Meters per pixel along the x axis
    pub x: f64,

    /// Meters per pixel along the y axis
    pub y: f64,
}

/// Derive the pixel-to-meter scale from a floor plan.
///
/// Fails on any non-positive dimension. The first offending field is
/// reported.
pub fn compute_scale(plan: &FloorPlan) -> Result<Scale> {
    if plan.canvas_width_px == 0 {
        return Err(WardtraceError::Validation {
            field: "canvas_width_px".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if plan.canvas_height_px == 0 {
        return Err(WardtraceError::Validation {
            field: "canvas_height_px".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if plan.width_meters <= 0.0 {
        return Err(WardtraceError::Validation {
            field: "width_meters".to_string(),
            reason: format!("must be positive, got {}", plan.width_meters),
        });
    }

    if plan.height_meters <= 0.0 {
        return Err(WardtraceError::Validation {
            field: "height_meters".to_string(),
            reason: format!("must be positive, got {}", plan.height_meters),
        });
    }

    Ok(Scale {
        x: plan.width_meters / plan.canvas_width_px as f64,
        y: plan.height_meters / plan.canvas_height_px as f64,
    })
}

/// Distance in meters from a room's outline centroid to its gateway.
///
/// Uses the scale fields stored on the room itself, not a freshly measured
/// canvas, so historical rooms stay stable when the live canvas resizes.
/// Returns `None` when the room has no gateway.
pub fn gateway_distance(room: &Room) -> Option<f64> {
    let gateway = room.gateway.as_ref()?;
    let centroid = vertex_centroid(&room.points)?;
    let scale = compute_scale(&room.floor_plan()).ok()?;
    Some(meters_distance(centroid, gateway.position(), scale.x, scale.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wardtrace_core::models::{GatewayMarker, Point, RoomId};

    fn test_plan(width_meters: f64, height_meters: f64, w_px: u32, h_px: u32) -> FloorPlan {
        FloorPlan::new("Ward B", "data:image/png;base64,xyz", width_meters, height_meters, w_px, h_px)
    }

    fn test_room(points: Vec<Point>, gateway: Option<GatewayMarker>) -> Room {
        let mut room = Room {
            id: RoomId::new(),
            name: "ICU-1".to_string(),
            floor_plan_name: "Ward B".to_string(),
            floor_plan_width_meters: 10.0,
            floor_plan_height_meters: 5.0,
            image_ref: "data:image/png;base64,xyz".to_string(),
            canvas_width_px: 500,
            canvas_height_px: 250,
            points,
            gateway,
            distance_to_gateway: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        room.distance_to_gateway = gateway_distance(&room);
        room
    }

    #[test]
    fn test_compute_scale() {
        let scale = compute_scale(&test_plan(10.0, 5.0, 500, 250)).unwrap();
        assert!((scale.x - 0.02).abs() < 1e-12);
        assert!((scale.y - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_compute_scale_rejects_zero_canvas() {
        let err = compute_scale(&test_plan(10.0, 5.0, 0, 250)).unwrap_err();
        assert!(
            matches!(err, WardtraceError::Validation { ref field, .. } if field == "canvas_width_px")
        );
    }

    #[test]
    fn test_compute_scale_rejects_non_positive_meters() {
        let err = compute_scale(&test_plan(-1.0, 5.0, 500, 250)).unwrap_err();
        assert!(
            matches!(err, WardtraceError::Validation { ref field, .. } if field == "width_meters")
        );
    }

    #[test]
    fn test_gateway_distance_uses_stored_scale() {
        // Centroid of the square is (100, 100); gateway 150px away on x.
        // At 0.02 m/px that is 3.0 meters.
        let points = vec![
            Point::new(50.0, 50.0),
            Point::new(150.0, 50.0),
            Point::new(150.0, 150.0),
            Point::new(50.0, 150.0),
        ];
        let room = test_room(points, Some(GatewayMarker::new(250.0, 100.0, "GW-1")));
        let d = room.distance_to_gateway.unwrap();
        assert!((d - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_gateway_distance_none_without_gateway() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let room = test_room(points, None);
        assert!(room.distance_to_gateway.is_none());
    }
}
