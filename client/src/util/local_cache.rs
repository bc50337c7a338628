//! Browser `localStorage` access for persisted display preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store reads these keys once at page load and writes them on every
//! mutating operation. Keys are stored as plain strings so other scripts on
//! the page can read them without JSON decoding.

#[cfg(test)]
#[path = "local_cache_test.rs"]
mod local_cache_test;

use std::cell::RefCell;
use std::collections::HashMap;

use wire::{PartialPreferences, ThemeColor, UserPreferences};

pub const THEME_COLOR_KEY: &str = "themeColor";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const LANGUAGE_KEY: &str = "language";

/// Synchronous string key-value cache surviving page reloads.
pub trait LocalCache {
    fn get(&self, key: &str) -> Option<String>;

    /// Best-effort write. Failures are logged by the implementation.
    fn set(&self, key: &str, value: &str);
}

/// Read whatever preferences the cache holds. `showNsfw` is never cached.
pub fn read_cached(cache: &impl LocalCache) -> PartialPreferences {
    PartialPreferences {
        dark_mode: cache.get(DARK_MODE_KEY).map(|v| v == "true"),
        theme_color: cache.get(THEME_COLOR_KEY).map(|v| ThemeColor::parse(&v)),
        show_nsfw: None,
        language: cache.get(LANGUAGE_KEY).filter(|v| !v.trim().is_empty()),
    }
}

pub fn write_theme_color(cache: &impl LocalCache, color: ThemeColor) {
    cache.set(THEME_COLOR_KEY, color.key());
}

pub fn write_dark_mode(cache: &impl LocalCache, enabled: bool) {
    cache.set(DARK_MODE_KEY, if enabled { "true" } else { "false" });
}

pub fn write_language(cache: &impl LocalCache, language: &str) {
    cache.set(LANGUAGE_KEY, language);
}

/// Write every cached field of `prefs`.
pub fn write_all(cache: &impl LocalCache, prefs: &UserPreferences) {
    write_theme_color(cache, prefs.theme_color);
    write_dark_mode(cache, prefs.dark_mode);
    write_language(cache, &prefs.language);
}

// =============================================================================
// IN-MEMORY CACHE
// =============================================================================

/// Cache kept in process memory. Used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored entry.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl LocalCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// Cache backed by `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl LocalCache for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            leptos::logging::warn!("localStorage unavailable; dropped write of {key}");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            leptos::logging::warn!("localStorage write of {key} failed: {e:?}");
        }
    }
}
