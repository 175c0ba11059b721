//! Port trait definitions
//!
//! These traits define the interfaces that storage adapters must implement.

pub mod storage;

pub use storage::{GatewayStore, RoomStore};
