mod file_store;
mod gateway;
mod interface;
mod memory;
mod snapshot;

pub use file_store::FileStore;
pub use gateway::{DualStore, SNAPSHOT_KEY};
pub use interface::{Result, StorageBackend, StoreError};
pub use memory::MemoryStore;
pub use snapshot::Snapshot;
