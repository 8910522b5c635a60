//! State Storage
//!
//! Persists the whole `AppState` as one JSON blob under a single key.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{AppState, SCHEMA_VERSION};

/// localStorage key shared with earlier versions of the widget
pub const STORAGE_KEY: &str = "animeData";

/// Backend holding the persisted blob
pub trait StateStorage {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> LedgerResult<Option<AppState>>;

    /// Overwrite the stored blob
    fn save(&self, state: &AppState) -> LedgerResult<()>;
}

/// Browser localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl StateStorage for BrowserStorage {
    fn load(&self) -> LedgerResult<Option<AppState>> {
        match LocalStorage::get::<AppState>(STORAGE_KEY) {
            Ok(state) => check_schema(state).map(Some),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(err)) => Err(LedgerError::CorruptState(err.to_string())),
            Err(err) => Err(LedgerError::Storage(err.to_string())),
        }
    }

    fn save(&self, state: &AppState) -> LedgerResult<()> {
        LocalStorage::set(STORAGE_KEY, state).map_err(|e| LedgerError::Storage(e.to_string()))
    }
}

/// Reject blobs from a newer schema; older ones share the current shape
fn check_schema(state: AppState) -> LedgerResult<AppState> {
    if state.version > SCHEMA_VERSION {
        return Err(LedgerError::UnsupportedSchema(state.version));
    }
    Ok(state)
}

/// In-memory blob, same encoding as the browser backend
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: std::sync::Mutex<Option<String>>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_blob(raw: &str) -> Self {
        Self {
            blob: std::sync::Mutex::new(Some(raw.to_string())),
            fail_writes: false,
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.blob.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl StateStorage for MemoryStorage {
    fn load(&self) -> LedgerResult<Option<AppState>> {
        let Some(raw) = self.raw() else {
            return Ok(None);
        };
        let state = serde_json::from_str(&raw).map_err(|e| LedgerError::CorruptState(e.to_string()))?;
        check_schema(state).map(Some)
    }

    fn save(&self, state: &AppState) -> LedgerResult<()> {
        if self.fail_writes {
            return Err(LedgerError::Storage("quota exceeded".to_string()));
        }
        let raw = serde_json::to_string(state).map_err(|e| LedgerError::Storage(e.to_string()))?;
        *self.blob.lock().unwrap() = Some(raw);
        Ok(())
    }
}
