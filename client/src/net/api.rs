//! REST calls to the preference endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Off-browser builds only carry the trait and the response interpretation,
//! which the store and its tests use with scripted remotes.
//!
//! ERROR HANDLING
//! ==============
//! Response bodies are read even on non-2xx statuses: the server reports
//! rejections as `{status: "error", message}` with a 4xx code, and that
//! message is what the user sees.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{ApiResponse, UserPreferences};

use crate::state::error::PreferenceError;

pub const SAVE_PREFERENCES_ENDPOINT: &str = "/save_preferences";
pub const CHANGE_LANGUAGE_ENDPOINT: &str = "/change_language";

/// Remote record of the user's preferences.
pub trait RemotePreferences {
    /// Persist all four fields in one request.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::Transport`] when no readable response
    /// arrives and [`PreferenceError::Rejected`] for a non-success status.
    async fn save_preferences(&self, prefs: &UserPreferences) -> Result<(), PreferenceError>;

    /// Switch the session locale.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`RemotePreferences::save_preferences`].
    async fn change_language(&self, language: &str) -> Result<(), PreferenceError>;
}

/// Map a decoded response body onto the call outcome.
///
/// # Errors
///
/// Returns [`PreferenceError::Rejected`] unless `status` is `success`.
pub fn interpret_response(body: ApiResponse) -> Result<(), PreferenceError> {
    if body.is_success() {
        Ok(())
    } else {
        Err(PreferenceError::Rejected { message: body.message })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn unreadable_response_message(status: u16, detail: &str) -> String {
    format!("unreadable response (status {status}): {detail}")
}

/// Remote backed by the site's own endpoints.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRemote;

#[cfg(feature = "hydrate")]
impl HttpRemote {
    async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<(), PreferenceError> {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| PreferenceError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| PreferenceError::Transport(e.to_string()))?;
        let status = resp.status();
        let body: ApiResponse = resp
            .json()
            .await
            .map_err(|e| PreferenceError::Transport(unreadable_response_message(status, &e.to_string())))?;
        interpret_response(body)
    }
}

#[cfg(feature = "hydrate")]
impl RemotePreferences for HttpRemote {
    async fn save_preferences(&self, prefs: &UserPreferences) -> Result<(), PreferenceError> {
        Self::post_json(SAVE_PREFERENCES_ENDPOINT, prefs).await
    }

    async fn change_language(&self, language: &str) -> Result<(), PreferenceError> {
        let body = wire::ChangeLanguageRequest { language: language.to_owned() };
        Self::post_json(CHANGE_LANGUAGE_ENDPOINT, &body).await
    }
}
