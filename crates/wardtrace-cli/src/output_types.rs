use serde::Serialize;
use tabled::Tabled;
use wardtrace_core::models::{GatewayDevice, Room};

/// Output for init command
#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub data_dir: String,
}

/// Output for status command
#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub data_dir: String,
    pub room_count: usize,
    pub gateway_count: usize,
    pub rooms_recovered_from_corrupt: bool,
    pub gateways_recovered_from_corrupt: bool,
}

/// Row for the rooms table
#[derive(Debug, Serialize, Tabled)]
pub struct RoomRow {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "Name")]
    pub name: String,

    #[tabled(rename = "Floor Plan")]
    pub floor_plan: String,

    #[tabled(rename = "Corners")]
    pub corners: usize,

    #[tabled(rename = "Gateway")]
    pub gateway: String,

    #[tabled(rename = "Distance (m)")]
    pub distance_m: String,
}

impl From<&Room> for RoomRow {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name.clone(),
            floor_plan: room.floor_plan_name.clone(),
            corners: room.points.len(),
            gateway: room
                .gateway
                .as_ref()
                .map(|g| g.name.clone())
                .unwrap_or_else(|| "-".to_string()),
            distance_m: room
                .distance_to_gateway
                .map(|d| format!("{:.2}", d))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Row for the gateways table
#[derive(Debug, Serialize, Tabled)]
pub struct GatewayRow {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "Name")]
    pub name: String,

    #[tabled(rename = "Model")]
    pub model: String,

    #[tabled(rename = "MAC Address")]
    pub mac_address: String,

    #[tabled(rename = "Status")]
    pub status: String,

    #[tabled(rename = "Last Seen")]
    pub last_seen: String,
}

impl From<&GatewayDevice> for GatewayRow {
    fn from(device: &GatewayDevice) -> Self {
        Self {
            id: device.id.to_string(),
            name: device.name.clone(),
            model: device.model.to_string(),
            mac_address: device.mac_address.clone(),
            status: device.status.to_string(),
            last_seen: device.last_seen.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wardtrace_core::models::{GatewayMarker, Point, RoomId};

    fn room(gateway: Option<GatewayMarker>, distance: Option<f64>) -> Room {
        Room {
            id: RoomId::new(),
            name: "ICU-1".to_string(),
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
            gateway,
            distance_to_gateway: distance,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_room_row_formats_distance() {
        let row = RoomRow::from(&room(
            Some(GatewayMarker::new(250.0, 100.0, "GW-1")),
            Some(3.04321),
        ));
        assert_eq!(row.gateway, "GW-1");
        assert_eq!(row.distance_m, "3.04");
        assert_eq!(row.corners, 3);
    }

    #[test]
    fn test_room_row_dashes_without_gateway() {
        let row = RoomRow::from(&room(None, None));
        assert_eq!(row.gateway, "-");
        assert_eq!(row.distance_m, "-");
    }
}
