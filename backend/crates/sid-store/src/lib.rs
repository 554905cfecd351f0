pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod memory_store;
pub mod sqlite_store;

pub use error::{Result, StoreError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;
