use crate::{KeyValueStore, Result as StoreErrorResult, StoreError};

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use tokio::sync::Mutex;

/// Store backed by a single JSON object file.
///
/// Every read goes to disk so separate processes sharing the file see each
/// other's writes. Writes replace the file through a temp file + rename.
/// A file that is not a JSON object of strings is moved to
/// [`FileStore::corrupt_path`] and the store reads as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> StoreErrorResult<BTreeMap<String, String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                self.quarantine(&e).await;
                Ok(BTreeMap::new())
            }
        }
    }

    /// Move an unparseable file aside so the store starts over empty.
    async fn quarantine(&self, error: &serde_json::Error) {
        let corrupt_path = self.corrupt_path();
        warn!(
            "Unreadable store file {} ({}), moving it to {}",
            self.path.display(),
            error,
            corrupt_path.display()
        );

        if let Err(e) = tokio::fs::rename(&self.path, &corrupt_path).await
            && e.kind() != ErrorKind::NotFound
        {
            // The next write replaces the file anyway
            warn!("Failed to move {} aside: {}", self.path.display(), e);
        }
    }

    /// Where an unparseable store file is kept for inspection
    pub fn corrupt_path(&self) -> PathBuf {
        self.path.with_extension("json.corrupt")
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> StoreErrorResult<()> {
        let io_error = |path: &Path, source: std::io::Error| StoreError::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| StoreError::Json {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|e| io_error(&temp_path, e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;

        debug!(
            "Wrote {} entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> StoreErrorResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).await
    }

    async fn keys_with_prefix(&self, prefix: &str) -> StoreErrorResult<Vec<String>> {
        Ok(self
            .read_entries()
            .await?
            .into_keys()
            .filter(|key| key.starts_with(prefix))
            .collect())
    }
}
