//! Gateway device registry.
//!
//! Same cache-over-port discipline as the room manager, on the disjoint
//! gateway slot: persist first, mutate the cache only after the write
//! succeeded.

use std::sync::Arc;

use chrono::Utc;

use wardtrace_core::error::{Result, WardtraceError};
use wardtrace_core::models::{GatewayDevice, GatewayId, GatewayModel, GatewayStatus};
use wardtrace_core::ports::GatewayStore;

pub struct GatewayRegistry {
    store: Arc<dyn GatewayStore>,
    gateways: Vec<GatewayDevice>,
    recovered: bool,
}

impl GatewayRegistry {
    /// Registry over a store, starting from the persisted collection. A
    /// corrupt gateway slot starts the registry empty with a warning, same
    /// policy as the room manager.
    pub fn load(store: Arc<dyn GatewayStore>) -> Result<Self> {
        let (gateways, recovered) = match store.load_gateways() {
            Ok(gateways) => (gateways, false),
            Err(WardtraceError::StorageCorrupt { slot, reason }) => {
                tracing::warn!(slot, reason, "gateway slot corrupt; treating collection as empty");
                (Vec::new(), true)
            }
            Err(e) => return Err(e),
        };

        Ok(Self { store, gateways, recovered })
    }

    /// Whether the last load found a corrupt slot and fell back to empty
    pub fn recovered_from_corrupt(&self) -> bool {
        self.recovered
    }

    /// All registered gateways, in registration order
    pub fn gateways(&self) -> &[GatewayDevice] {
        &self.gateways
    }

    /// Gateway by id
    pub fn get(&self, id: GatewayId) -> Option<&GatewayDevice> {
        self.gateways.iter().find(|g| g.id == id)
    }

    /// Register a gateway. New gateways report as connected with a fresh
    /// heartbeat; the MAC address is normalized to upper case.
    pub fn add(
        &mut self,
        name: &str,
        model: GatewayModel,
        mac_address: &str,
    ) -> Result<GatewayDevice> {
        if name.trim().is_empty() {
            return Err(WardtraceError::Validation {
                field: "name".to_string(),
                reason: "gateway name must not be empty".to_string(),
            });
        }

        if !is_valid_mac(mac_address) {
            return Err(WardtraceError::Validation {
                field: "mac_address".to_string(),
                reason: format!("'{}' is not a valid MAC address (AA:BB:CC:DD:EE:FF)", mac_address),
            });
        }

        let device = GatewayDevice {
            id: GatewayId::new(),
            name: name.to_string(),
            model,
            mac_address: mac_address.to_uppercase(),
            status: GatewayStatus::Connected,
            last_seen: Utc::now(),
        };

        let mut next = self.gateways.clone();
        next.push(device.clone());
        self.store.save_gateways(&next)?;
        self.gateways = next;

        tracing::info!(id = %device.id, name = %device.name, "gateway registered");
        Ok(device)
    }

    /// Remove a gateway by id and persist. Removing an absent id is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: GatewayId) -> Result<()> {
        if !self.gateways.iter().any(|g| g.id == id) {
            return Ok(());
        }

        let next: Vec<GatewayDevice> =
            self.gateways.iter().filter(|g| g.id != id).cloned().collect();
        self.store.save_gateways(&next)?;
        self.gateways = next;

        tracing::info!(%id, "gateway removed");
        Ok(())
    }

    /// Record a heartbeat from a gateway: refreshes `last_seen` and flips
    /// the status back to connected
    pub fn mark_seen(&mut self, id: GatewayId) -> Result<()> {
        let index = self
            .gateways
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| WardtraceError::GatewayNotFound { id: id.to_string() })?;

        let mut next = self.gateways.clone();
        next[index].status = GatewayStatus::Connected;
        next[index].last_seen = Utc::now();
        self.store.save_gateways(&next)?;
        self.gateways = next;

        Ok(())
    }
}

/// Six colon-separated pairs of hex digits
fn is_valid_mac(s: &str) -> bool {
    let parts: Vec<&str> = s.split(':').collect();
    parts.len() == 6
        && parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_hexdigit()))
}
