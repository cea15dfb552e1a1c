use thiserror::Error;

/// Failures a storage backend may report. The gateway catches every one
/// of these and reduces them to a per-backend outcome; they never reach
/// the ledger.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Key-value contract shared by every snapshot store. Absence of a key
/// is not an error; a failing backend is.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
