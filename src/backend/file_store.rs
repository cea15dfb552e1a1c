use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::backend::interface::{Result, StorageBackend};

/// Directory-backed key-value store: each key lives in its own JSON file
/// under the store directory.
pub struct FileStore {
    dir: PathBuf
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> FileStore {
        return FileStore { dir: dir.as_ref().to_owned() };
    }

    fn path_for(&self, key: &str) -> PathBuf {
        return self.dir.join(format!("{}.json", key));
    }
}

impl StorageBackend for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    static SCRATCH_SEQ: AtomicU32 = AtomicU32::new(0);

    fn scratch_dir() -> PathBuf {
        let seq = SCRATCH_SEQ.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "tugrik-file-store-{}-{}",
            std::process::id(),
            seq
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_key_reads_as_none() {
        let store = FileStore::new(scratch_dir());
        assert!(store.get("khan-bank-data").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = FileStore::new(scratch_dir());

        store.set("khan-bank-data", r#"{"balance": 1.0}"#).unwrap();

        assert_eq!(
            store.get("khan-bank-data").unwrap().as_deref(),
            Some(r#"{"balance": 1.0}"#)
        );
    }

    #[test]
    fn set_creates_the_store_directory() {
        let dir = scratch_dir().join("nested");
        let store = FileStore::new(&dir);

        store.set("khan-bank-data", "{}").unwrap();

        assert!(dir.join("khan-bank-data.json").is_file());
    }

    #[test]
    fn unreadable_entry_is_an_error() {
        let dir = scratch_dir();
        // A directory where the value file should be makes the read fail.
        std::fs::create_dir_all(dir.join("khan-bank-data.json")).unwrap();
        let store = FileStore::new(&dir);

        assert!(store.get("khan-bank-data").is_err());
    }
}
