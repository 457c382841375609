//! Session-scoped persistence of filter state
//!
//! Only `statusFilter`, `sortField` and `sortDirection` are stored; the
//! search query never is. Reads merge each stored field over its default
//! and fall back silently on any failure, so a missing, stale or corrupt
//! document can never block the list from rendering.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde_json::{Map, Value};
use vault_core::StorageError;

use crate::state::{FilterState, SortDirection, SortField, StatusFilter};
use crate::store::StateObserver;

/// Key/value storage whose contents live for one browsing session
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

// ─── In-memory backend ──────────────────────────────────────────────────────

/// Process-local session storage. Clones share the same items.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that refuses writes once keys plus values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            items: Arc::default(),
            quota_bytes: Some(bytes),
        }
    }
}

fn poisoned() -> StorageError {
    StorageError::Unavailable {
        reason: "session storage lock poisoned".to_string(),
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        if let Some(quota) = self.quota_bytes {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.remove(key);
        Ok(())
    }
}

// ─── File backend ───────────────────────────────────────────────────────────

/// Session storage backed by a single JSON object file.
///
/// The owner calls [`FileSessionStorage::clear`] when the session ends. A
/// file that does not hold a JSON object is treated as empty and replaced
/// on the next write.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drop everything stored for this session
    pub fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_items(&self) -> Result<Map<String, Value>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(items)) => Ok(items),
            _ => {
                tracing::debug!(path = %self.path.display(), "Ignoring unreadable session file");
                Ok(Map::new())
            }
        }
    }

    fn write_items(&self, items: &Map<String, Value>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items).map_err(|e| StorageError::Serialization {
            message: e.to_string(),
        })?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.read_items()?;
        Ok(items.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), Value::String(value.to_string()));
        self.write_items(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_items()?;
        if items.remove(key).is_some() {
            self.write_items(&items)?;
        }
        Ok(())
    }
}

// ─── Filter persistence ─────────────────────────────────────────────────────

/// Persisted projection of [`FilterState`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredFilters {
    status_filter: StatusFilter,
    sort_field: SortField,
    sort_direction: SortDirection,
}

impl From<&FilterState> for StoredFilters {
    fn from(state: &FilterState) -> Self {
        Self {
            status_filter: state.status_filter,
            sort_field: state.sort_field,
            sort_direction: state.sort_direction,
        }
    }
}

/// Loads and saves the persistable part of [`FilterState`] under one key
pub struct FilterPersistence<S> {
    storage: S,
    key: String,
}

impl<S: SessionStorage> FilterPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stored state merged over defaults. Never fails; `query` is always empty.
    pub fn load(&self) -> FilterState {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return FilterState::default(),
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "Session storage read failed, using defaults");
                return FilterState::default();
            }
        };

        let doc = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(doc)) => doc,
            Ok(_) => {
                tracing::debug!(key = %self.key, "Stored filters are not an object, using defaults");
                return FilterState::default();
            }
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "Stored filters unparseable, using defaults");
                return FilterState::default();
            }
        };

        FilterState {
            query: String::new(),
            status_filter: stored_field(&doc, "statusFilter"),
            sort_field: stored_field(&doc, "sortField"),
            sort_direction: stored_field(&doc, "sortDirection"),
        }
    }

    /// Write the persistable projection. Failures are logged and dropped.
    pub fn save(&self, state: &FilterState) {
        let raw = match serde_json::to_string(&StoredFilters::from(state)) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode filter state");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(&self.key, &raw) {
            tracing::warn!(
                key = %self.key,
                code = e.error_code(),
                error = %e,
                "Failed to persist filter state"
            );
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            tracing::debug!(key = %self.key, error = %e, "Failed to clear stored filters");
        }
    }
}

impl<S: SessionStorage> StateObserver for FilterPersistence<S> {
    fn on_change(&self, state: &FilterState) {
        self.save(state);
    }
}

/// One stored enum field, or its default when missing or unrecognized
fn stored_field<T>(doc: &Map<String, Value>, name: &str) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    let Some(value) = doc.get(name) else {
        return T::default();
    };
    match value.as_str().map(str::parse::<T>) {
        Some(Ok(parsed)) => parsed,
        Some(Err(e)) => {
            tracing::debug!(field = name, error = %e, "Unknown stored value, using default");
            T::default()
        }
        None => {
            tracing::debug!(field = name, "Stored value is not a string, using default");
            T::default()
        }
    }
}
