//! Durable key-value storage for the theme preference.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
use crate::theme::Theme;

/// A string key-value store that survives page reloads (localStorage).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Store backed by a map, used when no browser storage is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted theme, falling back to light when absent or unreadable.
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Theme {
    match store.get(key) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
            log::warn!("Ignoring stored theme: {}", e);
            Theme::default()
        }),
        Ok(None) => {
            log::debug!("No stored theme under '{}'", key);
            Theme::default()
        }
        Err(e) => {
            log::warn!("Failed to read stored theme: {}", e);
            Theme::default()
        }
    }
}

/// Persist the theme. Failures are logged, never surfaced.
pub fn save_theme<S: PreferenceStore + ?Sized>(store: &S, key: &str, theme: Theme) {
    if let Err(e) = store.set(key, theme.as_str()) {
        log::warn!("Failed to persist theme: {}", e);
    }
}
