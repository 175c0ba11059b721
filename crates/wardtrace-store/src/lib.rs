//! Wardtrace Store - Storage adapters
//!
//! Adapter implementations for the `RoomStore` and `GatewayStore` ports
//! defined in `wardtrace-core`: an in-memory backend for development and
//! tests, and a JSON-file slot backend for per-installation persistence.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::{MemoryGatewayStore, MemoryRoomStore};
