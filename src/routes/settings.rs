//! Server-rendered settings page shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page arrives already themed: the `<html>` element carries the mode and
//! color markers and the accent variables, and the resolved preferences are
//! embedded as JSON for the wasm client to seed from. The client mounts the
//! settings panel into `#settings-root`.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use wire::{EMBEDDED_PREFERENCES_ID, SETTINGS_ROOT_ID, UserPreferences};

use super::auth::{LANGUAGE_COOKIE, MaybeUser};
use crate::services::preferences;
use crate::state::AppState;

const STYLES: &str = r"
body { margin: 0; font-family: system-ui, sans-serif; transition: background-color 0.2s; }
html[data-theme='dark'] body { color: #e6e9ef; }
html[data-theme='light'] body { color: #1d2330; }
.settings-card { max-width: 32rem; margin: 3rem auto; padding: 1.5rem; border-radius: 12px; border: 1px solid var(--theme-color); }
.settings-card__row { display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem; }
.color-options { display: flex; gap: 0.5rem; }
.color-circle { width: 1.75rem; height: 1.75rem; border-radius: 50%; border: 2px solid transparent; cursor: pointer; }
.color-circle.selected { border-color: currentColor; }
.color-circle[data-color='blue'] { background: #007bff; }
.color-circle[data-color='green'] { background: #28a745; }
.color-circle[data-color='purple'] { background: #8540f5; }
.color-circle[data-color='orange'] { background: #fd7e14; }
.color-circle[data-color='red'] { background: #dc3545; }
.color-circle[data-color='custom'] { background: #7f7fff; }
.btn--primary { background: var(--theme-color); color: #fff; border: 0; padding: 0.5rem 1.25rem; border-radius: 6px; cursor: pointer; }
.btn--primary:hover { background: var(--theme-hover); }
.btn--primary:disabled { opacity: 0.6; cursor: progress; }
";

/// Serialize preferences for a `<script>` element. `<` is escaped so the
/// payload can never close the element.
fn embedded_json(prefs: &UserPreferences) -> String {
    serde_json::to_string(prefs)
        .unwrap_or_else(|_| "{}".to_owned())
        .replace('<', "\\u003c")
}

/// Render the full settings page for `prefs`.
#[must_use]
pub fn render_settings_page(prefs: &UserPreferences) -> String {
    let pair = prefs.theme_color.pair();
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" data-theme="{mode}" data-color="{color}" style="--theme-color: {main}; --theme-hover: {hover};">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Settings</title>
<style>{STYLES}</style>
<script id="{EMBEDDED_PREFERENCES_ID}" type="application/json">{json}</script>
</head>
<body style="background-color: {background};">
<div id="{SETTINGS_ROOT_ID}"></div>
<script type="module">
import init, {{ start }} from '/pkg/client.js';
await init();
start();
</script>
</body>
</html>
"#,
        lang = prefs.language,
        mode = prefs.mode(),
        color = prefs.theme_color.key(),
        main = pair.main,
        hover = pair.hover,
        background = prefs.background(),
        json = embedded_json(prefs),
    )
}

/// `GET /settings`: themed page shell. Lookup failures render defaults.
pub async fn settings_page(State(state): State<AppState>, MaybeUser(user_id): MaybeUser, jar: CookieJar) -> Html<String> {
    let language = jar.get(LANGUAGE_COOKIE).map(Cookie::value);
    let prefs = match preferences::resolve(&state.pool, user_id, language).await {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!(error = %e, "preference lookup failed; rendering defaults");
            preferences::apply_language_override(UserPreferences::default(), language)
        }
    };
    Html(render_settings_page(&prefs))
}
