//! Preference persistence.
//!
//! DESIGN
//! ======
//! One row per user in `user_preferences`, written with a single upsert.
//! Values are normalized before they reach the table: unknown colors become
//! blue and the language is reduced to a short locale tag. Reads resolve a
//! missing row (or an anonymous request) to defaults, so callers always get a
//! complete record.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;
use wire::{DEFAULT_LANGUAGE, ThemeColor, UserPreferences};

/// Longest locale tag accepted from clients.
pub const MAX_LANGUAGE_LEN: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Reduce a client-supplied locale to `[A-Za-z0-9_-]{1,16}`, else `"en"`.
#[must_use]
pub fn normalize_language(raw: &str) -> String {
    let trimmed = raw.trim();
    let valid = !trimmed.is_empty()
        && trimmed.len() <= MAX_LANGUAGE_LEN
        && trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid { trimmed.to_owned() } else { DEFAULT_LANGUAGE.to_owned() }
}

/// Normalize a submitted bundle before storage.
///
/// Unknown colors already decode as blue, so only the locale needs work.
#[must_use]
pub fn normalize(prefs: UserPreferences) -> UserPreferences {
    UserPreferences { language: normalize_language(&prefs.language), ..prefs }
}

/// Loose truthiness for submitted flags: `null`, `false`, `0`, `""`, `[]` and
/// `{}` are false, anything else is true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Read a submitted body leniently. Missing or mistyped fields take their
/// defaults; only a non-object body yields `None`.
#[must_use]
pub fn from_submitted(body: &Value) -> Option<UserPreferences> {
    let fields = body.as_object()?;
    let text = |key: &str| fields.get(key).and_then(Value::as_str);
    Some(UserPreferences {
        dark_mode: fields.get("darkMode").is_some_and(is_truthy),
        theme_color: text("themeColor").map(ThemeColor::parse).unwrap_or_default(),
        show_nsfw: fields.get("showNsfw").is_some_and(is_truthy),
        language: normalize_language(text("language").unwrap_or(DEFAULT_LANGUAGE)),
    })
}

fn row_to_preferences(row: &PgRow) -> Result<UserPreferences, sqlx::Error> {
    let color: String = row.try_get("theme_color")?;
    let language: String = row.try_get("language")?;
    Ok(UserPreferences {
        dark_mode: row.try_get("dark_mode")?,
        theme_color: ThemeColor::parse(&color),
        show_nsfw: row.try_get("show_nsfw")?,
        language: normalize_language(&language),
    })
}

/// Load the stored preferences for `user_id`, if a row exists.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn load(pool: &PgPool, user_id: Uuid) -> Result<Option<UserPreferences>, PreferencesError> {
    let row = sqlx::query(
        "SELECT dark_mode, theme_color, show_nsfw, language FROM user_preferences WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_preferences).transpose()?)
}

/// Insert or replace all four fields for `user_id`. Returns the stored values.
///
/// # Errors
///
/// Returns a database error if the upsert fails.
pub async fn upsert(pool: &PgPool, user_id: Uuid, prefs: UserPreferences) -> Result<UserPreferences, PreferencesError> {
    let prefs = normalize(prefs);
    sqlx::query(
        r"INSERT INTO user_preferences (user_id, dark_mode, theme_color, show_nsfw, language, updated_at)
          VALUES ($1, $2, $3, $4, $5, now())
          ON CONFLICT (user_id) DO UPDATE SET
              dark_mode = EXCLUDED.dark_mode,
              theme_color = EXCLUDED.theme_color,
              show_nsfw = EXCLUDED.show_nsfw,
              language = EXCLUDED.language,
              updated_at = now()",
    )
    .bind(user_id)
    .bind(prefs.dark_mode)
    .bind(prefs.theme_color.key())
    .bind(prefs.show_nsfw)
    .bind(&prefs.language)
    .execute(pool)
    .await?;

    tracing::info!(%user_id, color = %prefs.theme_color, dark = prefs.dark_mode, "preferences saved");
    Ok(prefs)
}

/// Preferences for the current request: the stored row for an authenticated
/// user, defaults otherwise. A `language` cookie overrides the locale.
///
/// # Errors
///
/// Returns a database error if loading the row fails.
pub async fn resolve(
    pool: &PgPool,
    user_id: Option<Uuid>,
    language_cookie: Option<&str>,
) -> Result<UserPreferences, PreferencesError> {
    let stored = match user_id {
        Some(id) => load(pool, id).await?,
        None => None,
    };
    Ok(apply_language_override(stored.unwrap_or_default(), language_cookie))
}

/// Replace the locale with the cookie value when one is present.
#[must_use]
pub fn apply_language_override(prefs: UserPreferences, language_cookie: Option<&str>) -> UserPreferences {
    match language_cookie {
        Some(lang) if !lang.trim().is_empty() => UserPreferences { language: normalize_language(lang), ..prefs },
        _ => prefs,
    }
}
