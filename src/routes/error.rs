//! JSON error responses for the preference endpoints.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use wire::ApiResponse;

use crate::services::preferences::PreferencesError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("No preferences data provided")]
    MissingBody,
    /// Write failure; the message is passed to the client.
    #[error("{0}")]
    Storage(#[from] PreferencesError),
    /// Read failure; details stay in the log.
    #[error("Could not load preferences")]
    Lookup(#[source] PreferencesError),
    #[error("session lookup failed")]
    SessionLookup(#[source] sqlx::Error),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::MissingBody | Self::Storage(_) => StatusCode::BAD_REQUEST,
            Self::Lookup(_) | Self::SessionLookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(e) => tracing::error!(error = %e, "preference storage failed"),
            Self::Lookup(e) => tracing::error!(error = %e, "preference lookup failed"),
            Self::SessionLookup(e) => tracing::error!(error = %e, "session lookup failed"),
            Self::Unauthenticated | Self::MissingBody => tracing::debug!(error = %self, "request rejected"),
        }
        (self.status(), Json(ApiResponse::error(self.to_string()))).into_response()
    }
}
