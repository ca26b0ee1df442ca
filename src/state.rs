//! Shared application state.
//!
//! The whole inventory lives behind one `RwLock`. Check-out and check-in
//! take the write lock for the full status update plus log append, so
//! mutations of the same key are serialized and readers never see a
//! half-applied operation. The lock is never held across an `.await`.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    services::{inventory_service::Inventory, seed},
};

/// Type alias for the shared, lock-protected inventory.
pub type SharedInventory = Arc<RwLock<Inventory>>;

/// State handed to every handler via axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    pub inventory: SharedInventory,

    /// Number of entries returned by `GET /activity`
    pub recent_activity_limit: usize,
}

impl AppState {
    pub fn new(inventory: Inventory, recent_activity_limit: usize) -> Self {
        Self {
            inventory: Arc::new(RwLock::new(inventory)),
            recent_activity_limit,
        }
    }

    /// Build state from configuration, loading the demo fleet if enabled.
    pub fn from_config(config: &Config) -> Self {
        let inventory = if config.seed_inventory {
            seed::seed_inventory(chrono::Utc::now())
        } else {
            Inventory::default()
        };
        Self::new(inventory, config.recent_activity_limit)
    }
}
