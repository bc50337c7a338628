//! Session extractors and the locale cookie.
//!
//! The session cookie is issued by the account flow; these extractors only
//! read it. `AuthUser` rejects anonymous requests, `MaybeUser` lets pages
//! render defaults for them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::FromRef;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use uuid::Uuid;

use super::error::ApiError;
use crate::services::session;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session_token";
pub const LANGUAGE_COOKIE: &str = "language";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

/// Long-lived cookie carrying the selected locale.
#[must_use]
pub fn language_cookie(language: String) -> Cookie<'static> {
    Cookie::build((LANGUAGE_COOKIE, language))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::days(365))
        .build()
}

fn session_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(SESSION_COOKIE)
        .map(Cookie::value)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user_id: Uuid,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = session_token(parts).ok_or(ApiError::Unauthenticated)?;
        let app_state = AppState::from_ref(state);
        let user_id = session::validate_session(&app_state.pool, &token)
            .await
            .map_err(ApiError::SessionLookup)?
            .ok_or(ApiError::Unauthenticated)?;
        Ok(Self { user_id })
    }
}

/// Optional user. Lookup failures degrade to anonymous.
pub struct MaybeUser(pub Option<Uuid>);

impl<S> axum::extract::FromRequestParts<S> for MaybeUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(parts) else {
            return Ok(Self(None));
        };
        let app_state = AppState::from_ref(state);
        match session::validate_session(&app_state.pool, &token).await {
            Ok(user_id) => Ok(Self(user_id)),
            Err(e) => {
                tracing::warn!(error = %e, "session lookup failed; treating request as anonymous");
                Ok(Self(None))
            }
        }
    }
}
