//! Error types for Wardtrace

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WardtraceError {
    // Validation errors
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    // Record errors
    #[error("Room not found: {id}")]
    RoomNotFound { id: String },

    #[error("Gateway not found: {id}")]
    GatewayNotFound { id: String },

    // Storage errors
    #[error("Stored data in slot '{slot}' is corrupt: {reason}")]
    StorageCorrupt { slot: String, reason: String },

    #[error("Failed to write slot '{slot}': {reason}")]
    StorageWrite { slot: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, WardtraceError>;
