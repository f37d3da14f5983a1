use std::cell::Cell;
use std::rc::Rc;

use super::{ Theme, ThemePreference };
use crate::error::ClientError;

/// Persists the single theme preference.
///
/// Writes only ever overwrite; nothing deletes the value.
pub trait PreferenceStore {
    fn get(&self) -> ThemePreference;
    fn set(&self, theme: Theme);
}

/// Non-persistent store. Used where local storage does not exist and as the
/// fallback behind it when it fails.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Rc<Cell<Option<Theme>>>,
}

impl MemoryStore {
    pub fn with(theme: Theme) -> Self {
        let store = Self::default();
        store.set(theme);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> ThemePreference {
        self.value.get().map(ThemePreference::from).unwrap_or_default()
    }

    fn set(&self, theme: Theme) {
        self.value.set(Some(theme));
    }
}

/// Raw string key/value storage, e.g. the browser's `localStorage`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError>;
}

/// Preference kept in key/value storage, backed by memory when the storage
/// is missing or refuses writes.
pub struct FallbackStore<S> {
    storage: Option<S>,
    key: String,
    fallback: MemoryStore,
    write_failed: Cell<bool>,
}

impl<S: KeyValueStorage> FallbackStore<S> {
    pub fn new(storage: Option<S>, key: impl Into<String>) -> Self {
        if storage.is_none() {
            log::warn!("{}, theme preference will not persist", ClientError::StorageUnavailable);
        }
        Self {
            storage,
            key: key.into(),
            fallback: MemoryStore::default(),
            write_failed: Cell::new(false),
        }
    }

    /// True while the value only lives in memory.
    pub fn is_degraded(&self) -> bool {
        self.storage.is_none() || self.write_failed.get()
    }
}

impl<S: KeyValueStorage> PreferenceStore for FallbackStore<S> {
    fn get(&self) -> ThemePreference {
        let Some(storage) = self.storage.as_ref().filter(|_| !self.write_failed.get()) else {
            return self.fallback.get();
        };
        match storage.get_item(&self.key) {
            Ok(value) => ThemePreference::from_stored(value.as_deref()),
            Err(e) => {
                log::warn!("Reading {:?} from storage failed: {}", self.key, e);
                self.fallback.get()
            }
        }
    }

    fn set(&self, theme: Theme) {
        self.fallback.set(theme);
        let Some(storage) = &self.storage else {
            return;
        };
        match storage.set_item(&self.key, theme.as_str()) {
            Ok(()) => self.write_failed.set(false),
            Err(e) => {
                log::warn!("Writing {:?} to storage failed: {}", self.key, e);
                self.write_failed.set(true);
            }
        }
    }
}
