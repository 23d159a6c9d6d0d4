//! Persistent key-value storage over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules talk to a [`KeyValueStore`] rather than `web-sys` directly,
//! so the browser adapter can be swapped for an in-memory fake in native
//! tests. The `*_json` helpers are the defensive layer: they log and swallow
//! failures so callers always get a usable value.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native builds report
//! [`StorageError::Unavailable`] and callers degrade to in-memory state.

#[cfg(test)]
#[path = "storage_test.rs"]
pub(crate) mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors produced by storage reads and writes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists (no window, storage disabled, native build).
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    /// Includes quota exhaustion.
    #[error("storage write failed: {0}")]
    Write(String),

    #[error("stored value malformed: {0}")]
    Malformed(String),

    #[error("value serialization failed: {0}")]
    Serialize(String),
}

/// String key-value storage with fallible operations.
pub trait KeyValueStore {
    /// Read `key`; `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite `key` with `value`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// BROWSER
// =============================================================================

/// Handle to `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Read(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================================
// JSON HELPERS
// =============================================================================

/// Read and decode the JSON value stored under `key`.
///
/// # Errors
///
/// Returns the store's read error, or [`StorageError::Malformed`] if the
/// stored text is not valid JSON for `T`.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Malformed(e.to_string()))
}

/// Load a JSON value for `key`, falling back to `T::default()` on absence or
/// any failure. Failures are logged.
pub fn load_json_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match read_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("error reading storage key {key:?}: {e}");
            T::default()
        }
    }
}

/// Save `value` as JSON under `key`. Returns `false` if the write failed;
/// the failure is logged and not retried.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("error writing storage key {key:?}: {}", StorageError::Serialize(e.to_string()));
            return false;
        }
    };
    match store.set(key, &raw) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("error writing storage key {key:?}: {e}");
            false
        }
    }
}

/// Remove `key`, logging any failure.
pub fn remove_entry<S>(store: &S, key: &str) -> bool
where
    S: KeyValueStore + ?Sized,
{
    match store.remove(key) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("error removing storage key {key:?}: {e}");
            false
        }
    }
}
