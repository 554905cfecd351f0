
use crate::{SessionManager, SessionSettings};

use sid_core::ErrorLocation;
use sid_store::{KeyValueStore, MemoryStore, Result as StoreErrorResult, StoreError};

use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

/// Manager with no simulated latency over a store the test can inspect
pub(crate) fn immediate_manager() -> (Arc<MemoryStore>, SessionManager) {
    let store = Arc::new(MemoryStore::new());
    let manager = SessionManager::new(store.clone(), SessionSettings::immediate());
    (store, manager)
}

/// Store whose every operation fails with an IO error
pub(crate) struct UnavailableStore;

impl UnavailableStore {
    #[track_caller]
    fn error() -> StoreError {
        StoreError::Io {
            path: PathBuf::from("storage.json"),
            source: std::io::Error::other("disk unavailable"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl KeyValueStore for UnavailableStore {
    async fn get(&self, _key: &str) -> StoreErrorResult<Option<String>> {
        Err(Self::error())
    }

    async fn set(&self, _key: &str, _value: &str) -> StoreErrorResult<()> {
        Err(Self::error())
    }

    async fn remove(&self, _key: &str) -> StoreErrorResult<()> {
        Err(Self::error())
    }

    async fn keys_with_prefix(&self, _prefix: &str) -> StoreErrorResult<Vec<String>> {
        Err(Self::error())
    }
}
