//! Shared preference model and JSON contract for the settings endpoints.
//!
//! This crate owns the representation used by both the server and the
//! browser client: the `UserPreferences` record, the accent color table, and
//! the request/response bodies of `/save_preferences` and `/change_language`.

use serde::{Deserialize, Serialize};

/// Locale used when neither the cache nor the server supplies one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Response `status` value for a successful call.
pub const STATUS_SUCCESS: &str = "success";

/// Response `status` value for a failed call.
pub const STATUS_ERROR: &str = "error";

/// Page background in dark mode.
pub const DARK_BACKGROUND: &str = "#121a29";

/// Page background in light mode.
pub const LIGHT_BACKGROUND: &str = "#f4f5f7";

/// Id of the `<script type="application/json">` carrying server-rendered preferences.
pub const EMBEDDED_PREFERENCES_ID: &str = "user-preferences";

/// Id of the element the settings panel mounts into.
pub const SETTINGS_ROOT_ID: &str = "settings-root";

// =============================================================================
// THEME COLOR
// =============================================================================

/// Accent color key.
///
/// Unknown keys never fail to parse; they resolve to [`ThemeColor::Blue`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeColor {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Custom,
}

/// Main and hover shades derived from a [`ThemeColor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub main: &'static str,
    pub hover: &'static str,
}

impl ThemeColor {
    /// Every selectable color, in picker order.
    pub const ALL: [Self; 6] = [Self::Blue, Self::Green, Self::Purple, Self::Orange, Self::Red, Self::Custom];

    /// Parse a color key, falling back to blue for anything unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "green" => Self::Green,
            "purple" => Self::Purple,
            "orange" => Self::Orange,
            "red" => Self::Red,
            "custom" => Self::Custom,
            _ => Self::Blue,
        }
    }

    /// Key used in storage, attributes and JSON.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn pair(self) -> ColorPair {
        match self {
            Self::Blue => ColorPair { main: "#007bff", hover: "#0056b3" },
            Self::Green => ColorPair { main: "#28a745", hover: "#1e7e34" },
            Self::Purple => ColorPair { main: "#8540f5", hover: "#6629d1" },
            Self::Orange => ColorPair { main: "#fd7e14", hover: "#dc6502" },
            Self::Red => ColorPair { main: "#dc3545", hover: "#bd2130" },
            Self::Custom => ColorPair { main: "#7f7fff", hover: "#6666cc" },
        }
    }
}

impl From<String> for ThemeColor {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        color.key().to_owned()
    }
}

impl std::fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// USER PREFERENCES
// =============================================================================

/// A user's display preferences.
///
/// Missing JSON fields deserialize to their defaults, which is also the body
/// contract of `POST /save_preferences`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub dark_mode: bool,
    pub theme_color: ThemeColor,
    pub show_nsfw: bool,
    pub language: String,
}

impl UserPreferences {
    /// Value of the `data-theme` marker: `"dark"` or `"light"`.
    #[must_use]
    pub fn mode(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }

    #[must_use]
    pub fn background(&self) -> &'static str {
        if self.dark_mode { DARK_BACKGROUND } else { LIGHT_BACKGROUND }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            theme_color: ThemeColor::Blue,
            show_nsfw: false,
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

/// Preferences where any field may be unknown.
///
/// Used to merge sources field by field: the local cache, the document's
/// server-rendered values, then hardcoded defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialPreferences {
    pub dark_mode: Option<bool>,
    pub theme_color: Option<ThemeColor>,
    pub show_nsfw: Option<bool>,
    pub language: Option<String>,
}

impl PartialPreferences {
    /// Fill unknown fields from `fallback`, keeping known ones.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            dark_mode: self.dark_mode.or(fallback.dark_mode),
            theme_color: self.theme_color.or(fallback.theme_color),
            show_nsfw: self.show_nsfw.or(fallback.show_nsfw),
            language: self.language.or(fallback.language),
        }
    }

    /// Resolve into a complete record, using defaults for unknown fields.
    #[must_use]
    pub fn complete(self) -> UserPreferences {
        let defaults = UserPreferences::default();
        UserPreferences {
            dark_mode: self.dark_mode.unwrap_or(defaults.dark_mode),
            theme_color: self.theme_color.unwrap_or(defaults.theme_color),
            show_nsfw: self.show_nsfw.unwrap_or(defaults.show_nsfw),
            language: self.language.filter(|l| !l.trim().is_empty()).unwrap_or(defaults.language),
        }
    }
}

// =============================================================================
// ENDPOINT BODIES
// =============================================================================

/// Body of `POST /change_language`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLanguageRequest {
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ChangeLanguageRequest {
    fn default() -> Self {
        Self { language: default_language() }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_owned()
}

/// Response body shared by the preference endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    #[must_use]
    pub fn success(message: Option<String>) -> Self {
        Self { status: STATUS_SUCCESS.to_owned(), message }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { status: STATUS_ERROR.to_owned(), message: Some(message.into()) }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
