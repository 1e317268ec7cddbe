//! Local persistence for the tracker snapshot.
//!
//! The tracker writes its whole state under one fixed key after every
//! mutation. Stores only ever hold serialized text, never live state.
//!
//! ```text
//! <root>/
//!   fieldOfficerData.json   # Full tracker snapshot, overwritten on each change
//! ```

mod file;
mod memory;

use std::io;

use crate::model::Snapshot;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The key the tracker snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "fieldOfficerData";

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// A string key-value store, the shape of browser local storage.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reads the tracker snapshot from a store.
///
/// An absent snapshot is the empty state. So is a malformed one:
/// it is logged and discarded rather than treated as an error.
pub fn load_snapshot(store: &impl KeyValueStore) -> Result<Snapshot> {
    let Some(json) = store.get(SNAPSHOT_KEY)? else {
        log::debug!("no snapshot stored, starting empty");
        return Ok(Snapshot::default());
    };
    match serde_json::from_str(&json) {
        Ok(snapshot) => {
            log::debug!("loaded snapshot ({} bytes)", json.len());
            Ok(snapshot)
        }
        Err(e) => {
            log::warn!("discarding malformed snapshot: {e}");
            Ok(Snapshot::default())
        }
    }
}

/// Overwrites the stored snapshot with `snapshot`.
pub fn save_snapshot(store: &mut impl KeyValueStore, snapshot: &Snapshot) -> Result<()> {
    let json = serde_json::to_string(snapshot)?;
    store.set(SNAPSHOT_KEY, &json)?;
    log::debug!("saved snapshot ({} bytes)", json.len());
    Ok(())
}
