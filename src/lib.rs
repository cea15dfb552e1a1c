mod core;
mod backend;

pub use crate::core::{Amount, Ledger, SharedLedger, Transaction, TransferError, TransferResult};
pub use crate::core::{clock, currency, error, ledger, transaction};
pub use crate::backend::{DualStore, FileStore, MemoryStore, Snapshot, StorageBackend, StoreError};
pub use crate::backend::SNAPSHOT_KEY;
