use crate::Result as StoreErrorResult;

use std::sync::Arc;

use async_trait::async_trait;

/// Local persisted string key/value storage.
///
/// Plays the part a browser's local storage plays for a web front-end:
/// values are opaque strings (JSON in practice) and the last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreErrorResult<Option<String>>;

    /// Insert or overwrite
    async fn set(&self, key: &str, value: &str) -> StoreErrorResult<()>;

    /// Removing a missing key is not an error
    async fn remove(&self, key: &str) -> StoreErrorResult<()>;

    /// Keys starting with `prefix`, sorted
    async fn keys_with_prefix(&self, prefix: &str) -> StoreErrorResult<Vec<String>>;

    async fn contains(&self, key: &str) -> StoreErrorResult<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreErrorResult<()> {
        (**self).remove(key).await
    }

    async fn keys_with_prefix(&self, prefix: &str) -> StoreErrorResult<Vec<String>> {
        (**self).keys_with_prefix(prefix).await
    }
}
