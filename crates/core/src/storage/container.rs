use crate::errors::CoreError;

use super::backend::StorageBackend;
use super::format::Snapshot;
use super::manager::StorageManager;

/// Callback invoked with the new value after every change.
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A store with a load → mutate → persist-on-change lifecycle.
///
/// Write-back is suppressed until the initial load has run, so an empty
/// startup value can never overwrite previously persisted data. Persistence
/// failures are logged and kept as `last_error`; the in-memory value stays
/// authoritative for the rest of the session.
pub struct Persisted<T> {
    key: String,
    value: T,
    loaded: bool,
    listeners: Vec<Listener<T>>,
    last_error: Option<CoreError>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("loaded", &self.loaded)
            .field("listeners", &self.listeners.len())
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl<T: Snapshot + Default> Persisted<T> {
    /// Unloaded container holding `T::default()`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: T::default(),
            loaded: false,
            listeners: Vec::new(),
            last_error: None,
        }
    }

    /// Rehydrate from `backend`. Runs once; later calls are no-ops.
    ///
    /// A missing snapshot leaves the default value. A failed read is logged
    /// and also leaves the default value; the container is marked loaded
    /// either way so the session can keep working.
    pub fn load(&mut self, backend: &dyn StorageBackend) {
        if self.loaded {
            log::debug!("{} already loaded from '{}'", T::LABEL, self.key);
            return;
        }

        match StorageManager::load_snapshot::<T>(backend, &self.key) {
            Ok(Some(value)) => {
                log::debug!("Loaded {} from {} backend key '{}'", T::LABEL, backend.name(), self.key);
                self.value = value;
            }
            Ok(None) => {
                log::debug!("No stored {} under '{}', starting empty", T::LABEL, self.key);
            }
            Err(e) => {
                log::error!("Failed to load {} from '{}': {e}", T::LABEL, self.key);
                self.last_error = Some(e);
            }
        }

        self.loaded = true;
        self.notify();
    }

    /// Mutate the value, notify subscribers, then persist the whole snapshot
    /// (only once loaded). Returns whatever `f` returns.
    pub fn update<R>(&mut self, backend: &dyn StorageBackend, f: impl FnOnce(&mut T) -> R) -> R {
        let out = f(&mut self.value);
        self.notify();
        self.persist(backend);
        out
    }

    fn persist(&mut self, backend: &dyn StorageBackend) {
        if !self.loaded {
            log::debug!("Skipping save of {}: initial load not complete", T::LABEL);
            return;
        }
        match StorageManager::save_snapshot(backend, &self.key, &self.value) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                log::error!("Failed to save {} to '{}': {e}", T::LABEL, self.key);
                self.last_error = Some(e);
            }
        }
    }
}

impl<T> Persisted<T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Most recent load/save failure; cleared by the next successful save.
    pub fn last_error(&self) -> Option<&CoreError> {
        self.last_error.as_ref()
    }

    /// Register a callback run with the new value after every change.
    pub fn subscribe(&mut self, listener: Listener<T>) {
        self.listeners.push(listener);
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.value);
        }
    }
}
