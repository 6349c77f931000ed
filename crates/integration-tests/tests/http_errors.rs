//! The HTTP error taxonomy as clients observe it: status codes, response
//! bodies, and the guarantee that server-side detail never leaks.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use nuru_api::db::RepositoryError;
use nuru_api::error::ApiError;
use nuru_api::models::PromotionRejection;
use nuru_api::services::auth::AuthError;

async fn response_parts(err: ApiError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_client_errors_echo_their_message() {
    let cases = [
        (
            ApiError::Validation("Quantity must be at least 1".to_string()),
            StatusCode::BAD_REQUEST,
            "Quantity must be at least 1",
        ),
        (
            ApiError::NotFound("Product not found".to_string()),
            StatusCode::NOT_FOUND,
            "Product not found",
        ),
        (
            ApiError::Unauthorized("Missing bearer token".to_string()),
            StatusCode::UNAUTHORIZED,
            "Missing bearer token",
        ),
        (
            ApiError::Forbidden("Admin access required".to_string()),
            StatusCode::FORBIDDEN,
            "Admin access required",
        ),
        (ApiError::EmptyCart, StatusCode::BAD_REQUEST, "Cart is empty"),
    ];

    for (err, expected_status, expected_message) in cases {
        let (status, body) = response_parts(err).await;
        assert_eq!(status, expected_status);
        assert_eq!(body["error"], expected_message);
    }
}

#[tokio::test]
async fn test_auth_errors_map_through_their_own_statuses() {
    let cases = [
        (AuthError::EmailTaken, StatusCode::CONFLICT, "Email already registered"),
        (
            AuthError::InvalidCredentials,
            StatusCode::UNAUTHORIZED,
            "Invalid credentials",
        ),
        (
            AuthError::InvalidToken,
            StatusCode::UNAUTHORIZED,
            "Invalid or expired token",
        ),
        (
            AuthError::WeakPassword("Password must be at least 8 characters".to_string()),
            StatusCode::BAD_REQUEST,
            "Password must be at least 8 characters",
        ),
    ];

    for (err, expected_status, expected_message) in cases {
        let (status, body) = response_parts(ApiError::from(err)).await;
        assert_eq!(status, expected_status);
        assert_eq!(body["error"], expected_message);
    }
}

#[tokio::test]
async fn test_server_errors_never_leak_detail() {
    let internal = ApiError::Internal("connection pool exhausted".to_string());
    let (status, body) = response_parts(internal).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");

    let db = ApiError::from(RepositoryError::DataCorruption(
        "orders.items held malformed JSON".to_string(),
    ));
    let (status, body) = response_parts(db).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");

    let hash = ApiError::from(AuthError::PasswordHash);
    let (status, body) = response_parts(hash).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[test]
fn test_promotion_rejections_read_as_client_messages() {
    // Route handlers surface these via ApiError::Validation(rejection.to_string()).
    assert_eq!(PromotionRejection::Expired.to_string(), "Promo code expired");
    assert_eq!(
        PromotionRejection::LimitReached.to_string(),
        "Promo code limit reached"
    );
}
