//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Credentials;
use crate::service::DeliveryService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Network operations
    pub service: Arc<DeliveryService>,

    /// Admin credentials for mutating endpoints
    pub credentials: Arc<Credentials>,

    /// Map file reloaded by `/load-default-map`; the built-in map if unset
    pub map_file: Option<Arc<PathBuf>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(service: DeliveryService, credentials: Credentials, map_file: Option<PathBuf>) -> Self {
        Self {
            service: Arc::new(service),
            credentials: Arc::new(credentials),
            map_file: map_file.map(Arc::new),
        }
    }
}
