use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WardtraceError;

/// Unique identifier for a registered gateway device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GatewayId(pub Uuid);

impl GatewayId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GatewayId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GatewayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for GatewayId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Supported gateway hardware models (Minew G-series)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayModel {
    G1,
    G2,
}

impl std::fmt::Display for GatewayModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayModel::G1 => write!(f, "G1"),
            GatewayModel::G2 => write!(f, "G2"),
        }
    }
}

impl std::str::FromStr for GatewayModel {
    type Err = WardtraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "G1" => Ok(GatewayModel::G1),
            "G2" => Ok(GatewayModel::G2),
            _ => Err(WardtraceError::Validation {
                field: "model".to_string(),
                reason: format!("Unknown gateway model: {}. Use G1 or G2", s),
            }),
        }
    }
}

/// Connection status of a gateway device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayStatus {
    Connected,
    Disconnected,
}

impl std::fmt::Display for GatewayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayStatus::Connected => write!(f, "connected"),
            GatewayStatus::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// A network gateway registered with the facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayDevice {
    /// Unique identifier
    pub id: GatewayId,

    /// Gateway name
    pub name: String,

    /// Hardware model
    pub model: GatewayModel,

    /// MAC address, `AA:BB:CC:DD:EE:FF` form
    pub mac_address: String,

    /// Connection status
    pub status: GatewayStatus,

    /// When the gateway last reported in
    pub last_seen: DateTime<Utc>,
}
