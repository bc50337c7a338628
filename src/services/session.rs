//! Session lookup.
//!
//! Sessions are created by the account flow that owns `users`; this service
//! only resolves a cookie token to a user id. Expired rows never match.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Validate a session token and return the associated user id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<Uuid>, sqlx::Error> {
    let row = sqlx::query("SELECT user_id FROM sessions WHERE token = $1 AND expires_at > now()")
        .bind(token)
        .fetch_optional(pool)
        .await?;

    row.map(|r| r.try_get::<Uuid, _>("user_id")).transpose()
}
