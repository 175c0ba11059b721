//! Wardtrace Rooms - Record managers
//!
//! The room record manager and the gateway-device registry: in-memory
//! caches over the storage ports, with explicit load and save points
//! instead of ambient global access.

pub mod draft;
pub mod manager;
pub mod registry;

pub use draft::RoomDraft;
pub use manager::RoomManager;
pub use registry::GatewayRegistry;
