use std::sync::Arc;

use urbanhouse_core::ListingStore;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Loaded once at startup and shared read-only by every request.
    pub store: ListingStore,
}
