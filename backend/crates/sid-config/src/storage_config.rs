use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FILE_STORAGE_PATH, DEFAULT_SQLITE_STORAGE_PATH,
    StorageBackend,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Relative to the config directory; defaults depend on the backend
    pub path: Option<String>,
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        if path.trim().is_empty() {
            return Err(ConfigError::storage("storage.path cannot be empty"));
        }
        if Path::new(path).is_absolute() || path.contains("..") {
            return Err(ConfigError::storage(
                "storage.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Configured path or the backend default; None for the memory backend
    pub fn relative_path(&self) -> Option<&str> {
        match self.backend {
            StorageBackend::Memory => None,
            StorageBackend::File => Some(self.path.as_deref().unwrap_or(DEFAULT_FILE_STORAGE_PATH)),
            StorageBackend::Sqlite => {
                Some(self.path.as_deref().unwrap_or(DEFAULT_SQLITE_STORAGE_PATH))
            }
        }
    }

    pub fn resolve_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.relative_path().map(|path| config_dir.join(path))
    }
}
