//! Preference store: the page's single source of truth for display settings.
//!
//! DESIGN
//! ======
//! In-page state is authoritative for rendering. It is seeded at load from
//! the local cache (falling back per field to the server-rendered values and
//! then to defaults), changed by user actions, and replaced by the submitted
//! bundle only once the server confirms a save.
//!
//! Color, dark mode and language are written to the local cache as soon as
//! they change. The remote record is only written by `save`; a language
//! change also notifies the locale endpoint and asks for a reload.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures are notified and returned, never retried. A failed save
//! leaves cache and in-page state untouched. A failed language change keeps
//! the new language in the cache; the next successful save or reload
//! reconciles it.
//!
//! At most one remote call is outstanding. A second `save`/`set_language`
//! while one is pending is rejected with `PreferenceError::InFlight` before
//! any state changes; the user is told to wait.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};

use wire::{ThemeColor, UserPreferences};

use super::error::PreferenceError;
use crate::net::api::RemotePreferences;
use crate::util::document::Document;
use crate::util::local_cache::{self, LocalCache};
use crate::util::notify::{Notice, Notifier};
use crate::util::theme;

/// What the page bootstrap must do after a language change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageChange {
    /// The server accepted the locale; reload so server-rendered strings
    /// switch language.
    ReloadRequired,
}

/// Clears the in-flight flag when the remote call finishes or is dropped.
struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct PreferenceStore<C, R, D, N> {
    cache: C,
    remote: R,
    document: D,
    notifier: N,
    prefs: RefCell<UserPreferences>,
    in_flight: Cell<bool>,
}

impl<C, R, D, N> PreferenceStore<C, R, D, N>
where
    C: LocalCache,
    R: RemotePreferences,
    D: Document,
    N: Notifier,
{
    /// Create a store holding defaults. Call [`Self::load_initial`] before
    /// rendering anything from it.
    pub fn new(cache: C, remote: R, document: D, notifier: N) -> Self {
        Self {
            cache,
            remote,
            document,
            notifier,
            prefs: RefCell::new(UserPreferences::default()),
            in_flight: Cell::new(false),
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Snapshot of the in-page preferences.
    pub fn current(&self) -> UserPreferences {
        self.prefs.borrow().clone()
    }

    /// Whether a remote call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Seed in-page state and apply the theme. Never fails.
    pub fn load_initial(&self) -> UserPreferences {
        let cached = local_cache::read_cached(&self.cache);
        let embedded = self.document.embedded_preferences().unwrap_or_default();
        let prefs = cached.or(embedded).complete();
        leptos::logging::log!(
            "preferences loaded: color={} dark={} lang={}",
            prefs.theme_color,
            prefs.dark_mode,
            prefs.language
        );
        *self.prefs.borrow_mut() = prefs.clone();
        self.render();
        prefs
    }

    pub fn set_color(&self, color: ThemeColor) {
        self.prefs.borrow_mut().theme_color = color;
        self.render();
        local_cache::write_theme_color(&self.cache, color);
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.prefs.borrow_mut().dark_mode = enabled;
        self.render();
        local_cache::write_dark_mode(&self.cache, enabled);
    }

    /// Content filter has no cache key; it reaches storage through `save`.
    pub fn set_show_nsfw(&self, enabled: bool) {
        self.prefs.borrow_mut().show_nsfw = enabled;
    }

    /// Cache the locale and tell the server about it.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::InFlight`] without side effects when another
    /// remote call is pending, or the remote failure. On remote failure the
    /// cached language is kept.
    pub async fn set_language(&self, language: &str) -> Result<LanguageChange, PreferenceError> {
        let _guard = self.begin_remote()?;
        local_cache::write_language(&self.cache, language);
        self.prefs.borrow_mut().language = language.to_owned();

        match self.remote.change_language(language).await {
            Ok(()) => Ok(LanguageChange::ReloadRequired),
            Err(err) => {
                leptos::logging::warn!("language change to {language} failed: {err}");
                self.notifier.notify(&Notice::LanguageChangeFailed(err.server_message()));
                Err(err)
            }
        }
    }

    /// Persist all four fields remotely; on success commit them locally.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::InFlight`] when another remote call is
    /// pending, or the remote failure. Local state is unchanged on error.
    pub async fn save(&self, prefs: UserPreferences) -> Result<(), PreferenceError> {
        let _guard = self.begin_remote()?;

        match self.remote.save_preferences(&prefs).await {
            Ok(()) => {
                local_cache::write_all(&self.cache, &prefs);
                *self.prefs.borrow_mut() = prefs;
                self.render();
                self.notifier.notify(&Notice::Saved);
                Ok(())
            }
            Err(err) => {
                leptos::logging::warn!("saving preferences failed: {err}");
                self.notifier.notify(&Notice::SaveFailed(err.server_message()));
                Err(err)
            }
        }
    }

    fn begin_remote(&self) -> Result<InFlightGuard<'_>, PreferenceError> {
        if self.in_flight.replace(true) {
            leptos::logging::warn!("preference request rejected: another request is in flight");
            self.notifier.notify(&Notice::Busy);
            return Err(PreferenceError::InFlight);
        }
        Ok(InFlightGuard { flag: &self.in_flight })
    }

    /// Apply the theme for the current in-page state.
    fn render(&self) {
        let prefs = self.current();
        if let Err(err) = theme::apply(&self.document, &prefs) {
            leptos::logging::warn!("applying theme failed: {err}");
            self.notifier.notify(&Notice::DisplayFailed(err.to_string()));
        }
    }
}
