mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_backend;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_backend::StorageBackend;
pub use storage_config::StorageConfig;

pub const CONFIG_DIR_ENV: &str = "SID_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const MAX_SIGN_IN_DELAY_MS: u64 = 10_000;

const DEFAULT_CONFIG_DIR_NAME: &str = ".senegalid";
const DEFAULT_SIGN_IN_DELAY_MS: u64 = 500;
const DEFAULT_FILE_STORAGE_PATH: &str = "storage.json";
const DEFAULT_SQLITE_STORAGE_PATH: &str = "storage.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
