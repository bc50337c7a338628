//! Preference endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Authentication is checked before the body is read, so an anonymous save
//! with a malformed body still answers 401. Field values are read leniently;
//! only a missing or non-object body is rejected. Storage failures answer 400
//! with the error text in `message`; read failures answer 500.
//!
//! A successful save also rewrites the `language` cookie, so pages rendered
//! afterwards show the saved locale rather than an older selection.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::Value;
use wire::{ApiResponse, ChangeLanguageRequest, UserPreferences};

use super::auth::{AuthUser, LANGUAGE_COOKIE, MaybeUser, language_cookie};
use super::error::ApiError;
use crate::services::preferences;
use crate::state::AppState;

pub const SAVED_MESSAGE: &str = "Preferences saved successfully";

/// Decode a save body. `{}` is valid and means defaults.
pub(crate) fn submitted_preferences(body: Result<Json<Value>, JsonRejection>) -> Result<UserPreferences, ApiError> {
    let Json(value) = body.map_err(|e| {
        tracing::debug!(error = %e, "unreadable preferences body");
        ApiError::MissingBody
    })?;
    preferences::from_submitted(&value).ok_or(ApiError::MissingBody)
}

/// Success response for a stored record; the locale cookie follows the record.
pub(crate) fn saved_response(jar: CookieJar, saved: UserPreferences) -> (CookieJar, Json<ApiResponse>) {
    (
        jar.add(language_cookie(saved.language)),
        Json(ApiResponse::success(Some(SAVED_MESSAGE.to_owned()))),
    )
}

/// `POST /save_preferences`: upsert all four fields for the session user.
pub async fn save_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(CookieJar, Json<ApiResponse>), ApiError> {
    let prefs = submitted_preferences(body)?;
    let saved = preferences::upsert(&state.pool, auth.user_id, prefs).await?;
    Ok(saved_response(jar, saved))
}

/// Locale from an optional body; anything unreadable means the default.
pub(crate) fn language_from_body(body: Result<Json<ChangeLanguageRequest>, JsonRejection>) -> String {
    let request = body.map(|Json(req)| req).unwrap_or_default();
    preferences::normalize_language(&request.language)
}

/// `POST /change_language`: remember the locale for subsequent pages.
pub async fn change_language(
    jar: CookieJar,
    body: Result<Json<ChangeLanguageRequest>, JsonRejection>,
) -> impl IntoResponse {
    let language = language_from_body(body);
    tracing::info!(%language, "language changed");
    (jar.add(language_cookie(language)), Json(ApiResponse::success(None)))
}

/// `GET /api/preferences`: the preferences the next page render would use.
pub async fn current_preferences(
    State(state): State<AppState>,
    MaybeUser(user_id): MaybeUser,
    jar: CookieJar,
) -> Result<Json<UserPreferences>, ApiError> {
    let language = jar.get(LANGUAGE_COOKIE).map(Cookie::value);
    let prefs = preferences::resolve(&state.pool, user_id, language)
        .await
        .map_err(ApiError::Lookup)?;
    Ok(Json(prefs))
}
