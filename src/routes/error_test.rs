use axum::body::to_bytes;

use super::*;

async fn body_of(response: Response) -> ApiResponse {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn storage_failure_is_400_with_error_text() {
    let err = ApiError::Storage(PreferencesError::Database(sqlx::Error::PoolTimedOut));
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_of(response).await;
    assert!(body.message.unwrap().starts_with("database error"));
}

#[tokio::test]
async fn lookup_failure_is_500_without_details() {
    let err = ApiError::Lookup(PreferencesError::Database(sqlx::Error::PoolTimedOut));
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_of(response).await;
    assert_eq!(body, ApiResponse::error("Could not load preferences"));
}

#[test]
fn unauthenticated_is_401() {
    assert_eq!(ApiError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
}
