pub mod floor_plan;
pub mod gateway;
pub mod geometry;
pub mod room;

pub use floor_plan::FloorPlan;
pub use gateway::{GatewayDevice, GatewayId, GatewayModel, GatewayStatus};
pub use geometry::Point;
pub use room::{GatewayMarker, Room, RoomId};
