
use crate::App;

use sid_auth::{SessionManager, SessionSettings};
use sid_store::MemoryStore;

use std::sync::Arc;

/// Initialized app over a fresh in-memory store with no simulated latency
pub(crate) async fn memory_app() -> App {
    let store = Arc::new(MemoryStore::new());
    let manager = SessionManager::new(store, SessionSettings::immediate());
    manager.initialize().await.expect("memory store cannot fail");
    App::new(manager)
}
