use log::{error, info, warn};

use crate::backend::interface::StorageBackend;
use crate::backend::snapshot::{self, Snapshot};
use crate::core::Ledger;

/// Fixed key under which the ledger snapshot lives in every backend.
pub const SNAPSHOT_KEY: &str = "khan-bank-data";

/// Best-effort persistence across two independent key-value backends: an
/// optional primary store and an always-present fallback. Either backend
/// may fail on any call; data survives as long as one of them works.
pub struct DualStore {
    primary: Option<Box<dyn StorageBackend>>,
    fallback: Box<dyn StorageBackend>
}

impl DualStore {
    pub fn new(
        primary: Option<Box<dyn StorageBackend>>,
        fallback: Box<dyn StorageBackend>,
    ) -> DualStore {
        return DualStore { primary, fallback };
    }

    /// A gateway for hosts where the primary store does not exist.
    pub fn fallback_only(fallback: Box<dyn StorageBackend>) -> DualStore {
        return DualStore::new(None, fallback);
    }

    /// Writes the current snapshot to every configured backend. Each
    /// attempt is isolated; the result is true when at least one write
    /// landed. Never raises.
    pub fn save(&self, ledger: &Ledger) -> bool {
        let blob = match snapshot::encode(ledger) {
            Ok(blob) => blob,
            Err(err) => {
                error!("snapshot could not be serialized: {}", err);
                return false;
            }
        };

        let primary_ok = match &self.primary {
            Some(backend) => write_to("primary", backend.as_ref(), &blob),
            None => false
        };
        let fallback_ok = write_to("fallback", self.fallback.as_ref(), &blob);

        if primary_ok || fallback_ok {
            info!(
                "snapshot saved (primary: {}, fallback: {})",
                primary_ok, fallback_ok
            );
            return true;
        }
        error!("snapshot lost: every backend write failed");
        return false;
    }

    /// Restores the ledger from the first backend that yields a parsable
    /// blob, primary first. Returns None on the first run or when every
    /// backend fails; never raises.
    pub fn load(&self) -> Option<Ledger> {
        let snapshot = self
            .primary
            .as_ref()
            .and_then(|backend| read_from("primary", backend.as_ref()))
            .or_else(|| read_from("fallback", self.fallback.as_ref()))?;
        return Some(Ledger::from_snapshot(snapshot));
    }
}

fn write_to(label: &str, backend: &dyn StorageBackend, blob: &str) -> bool {
    match backend.set(SNAPSHOT_KEY, blob) {
        Ok(()) => true,
        Err(err) => {
            warn!("{} store write failed: {}", label, err);
            false
        }
    }
}

fn read_from(label: &str, backend: &dyn StorageBackend) -> Option<Snapshot> {
    match backend.get(SNAPSHOT_KEY) {
        Ok(Some(raw)) => {
            let parsed = snapshot::parse(&raw);
            if let Some(snapshot) = &parsed {
                match &snapshot.last_update {
                    Some(stamp) => {
                        info!("snapshot loaded from the {} store (last update {})", label, stamp)
                    }
                    None => info!("snapshot loaded from the {} store", label)
                }
            }
            parsed
        }
        Ok(None) => None,
        Err(err) => {
            warn!("{} store read failed: {}", label, err);
            None
        }
    }
}
