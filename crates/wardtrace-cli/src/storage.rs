use std::path::Path;
use std::sync::Arc;

use wardtrace_core::ports::{GatewayStore, RoomStore};
use wardtrace_store::FileStore;

/// Storage adapters for a CLI run. Both ports are served by one file store
/// rooted at the resolved data directory; the slots themselves stay
/// disjoint.
pub struct Storage {
    pub rooms: Arc<dyn RoomStore>,
    pub gateways: Arc<dyn GatewayStore>,
}

impl Storage {
    pub fn new(data_dir: &Path) -> Self {
        let store = Arc::new(FileStore::new(data_dir));
        Self {
            rooms: store.clone(),
            gateways: store,
        }
    }
}
