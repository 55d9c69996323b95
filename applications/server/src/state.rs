/// Shared application state
use roster_core::UserStore;
use roster_storage::MemoryStorage;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-memory store holding the seed users
    pub fn seeded() -> Self {
        Self::new(Arc::new(MemoryStorage::seeded()))
    }
}
