//! Theme application: preferences to document presentation.
//!
//! Writes the accent pair as `--theme-color` / `--theme-hover` custom
//! properties and a `data-theme` / `data-color` attribute pair on `<html>`,
//! plus the body background for the active mode. The page stylesheet reads
//! those; nothing here knows about layout.
//!
//! TRADE-OFFS
//! ==========
//! Every call rewrites all five values with no diff against the previous
//! state, so repeated application from any trigger leaves the same document.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use wire::{ThemeColor, UserPreferences};

use super::document::Document;
use crate::state::error::PreferenceError;

pub const THEME_COLOR_PROPERTY: &str = "--theme-color";
pub const THEME_HOVER_PROPERTY: &str = "--theme-hover";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const COLOR_ATTRIBUTE: &str = "data-color";

/// Everything [`apply`] writes, derived without touching the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePresentation {
    pub color: ThemeColor,
    pub main: &'static str,
    pub hover: &'static str,
    pub mode: &'static str,
    pub background: &'static str,
}

#[must_use]
pub fn presentation(prefs: &UserPreferences) -> ThemePresentation {
    let pair = prefs.theme_color.pair();
    ThemePresentation {
        color: prefs.theme_color,
        main: pair.main,
        hover: pair.hover,
        mode: prefs.mode(),
        background: prefs.background(),
    }
}

/// Write the presentation for `prefs` into `document`.
///
/// # Errors
///
/// Returns the first document write that fails. Writes before it stay applied.
pub fn apply(document: &impl Document, prefs: &UserPreferences) -> Result<(), PreferenceError> {
    let p = presentation(prefs);
    document.set_root_property(THEME_COLOR_PROPERTY, p.main)?;
    document.set_root_property(THEME_HOVER_PROPERTY, p.hover)?;
    document.set_root_attribute(COLOR_ATTRIBUTE, p.color.key())?;
    document.set_root_attribute(THEME_ATTRIBUTE, p.mode)?;
    document.set_body_background(p.background)
}
