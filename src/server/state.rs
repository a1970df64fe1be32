//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for cheap cloning into the per-worker
/// application factories.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, auth: AuthSystem, storage: Arc<StorageLayer>) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            storage,
        }
    }
}
