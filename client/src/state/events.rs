//! UI event dispatch for the settings page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never call store methods directly. They turn DOM events into a
//! `PreferenceEvent` and hand it to `dispatch`, which is the one table
//! mapping event kinds to store operations.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use wire::{ThemeColor, UserPreferences};

use super::error::PreferenceError;
use super::store::{LanguageChange, PreferenceStore};
use crate::net::api::RemotePreferences;
use crate::util::document::Document;
use crate::util::local_cache::LocalCache;
use crate::util::notify::Notifier;

/// A user or page-lifecycle event that touches preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreferenceEvent {
    /// Page finished loading.
    PageLoaded,
    /// A color circle was clicked; carries its `data-color` key.
    ColorPicked(String),
    DarkModeToggled(bool),
    NsfwToggled(bool),
    LanguageSelected(String),
    /// Save button; carries the form's current values.
    SaveClicked(UserPreferences),
}

/// Result of a dispatched event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatched {
    Loaded(UserPreferences),
    /// Local state changed and the theme was re-applied where relevant.
    Applied,
    /// The page must reload to pick up server-rendered locale strings.
    Reload,
    Saved,
}

/// Route `event` to its store operation.
///
/// # Errors
///
/// Propagates failures of the remote operations (`LanguageSelected`,
/// `SaveClicked`). The store has already notified the user when this returns
/// an error.
pub async fn dispatch<C, R, D, N>(
    store: &PreferenceStore<C, R, D, N>,
    event: PreferenceEvent,
) -> Result<Dispatched, PreferenceError>
where
    C: LocalCache,
    R: RemotePreferences,
    D: Document,
    N: Notifier,
{
    match event {
        PreferenceEvent::PageLoaded => Ok(Dispatched::Loaded(store.load_initial())),
        PreferenceEvent::ColorPicked(key) => {
            store.set_color(ThemeColor::parse(&key));
            Ok(Dispatched::Applied)
        }
        PreferenceEvent::DarkModeToggled(enabled) => {
            store.set_dark_mode(enabled);
            Ok(Dispatched::Applied)
        }
        PreferenceEvent::NsfwToggled(enabled) => {
            store.set_show_nsfw(enabled);
            Ok(Dispatched::Applied)
        }
        PreferenceEvent::LanguageSelected(language) => match store.set_language(&language).await? {
            LanguageChange::ReloadRequired => Ok(Dispatched::Reload),
        },
        PreferenceEvent::SaveClicked(prefs) => {
            store.save(prefs).await?;
            Ok(Dispatched::Saved)
        }
    }
}
