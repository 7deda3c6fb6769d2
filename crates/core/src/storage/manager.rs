use crate::errors::CoreError;

use super::backend::StorageBackend;
use super::format::Snapshot;

/// High-level storage operations: read/write whole store snapshots through a backend.
pub struct StorageManager;

impl StorageManager {
    /// Read and decode the snapshot stored under `key`.
    ///
    /// Flow: backend.get(key) → JSON text → `T::decode`
    /// Returns `Ok(None)` when nothing has been stored yet.
    pub fn load_snapshot<T: Snapshot>(
        backend: &dyn StorageBackend,
        key: &str,
    ) -> Result<Option<T>, CoreError> {
        let Some(data) = backend.get(key)? else {
            return Ok(None);
        };
        T::decode(&data).map(Some)
    }

    /// Encode `value` and store it under `key`, replacing the previous snapshot.
    pub fn save_snapshot<T: Snapshot>(
        backend: &dyn StorageBackend,
        key: &str,
        value: &T,
    ) -> Result<(), CoreError> {
        let data = value.encode()?;
        backend.set(key, &data)
    }
}
