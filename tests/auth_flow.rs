mod common;

use axum::http::StatusCode;
use serde_json::json;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use box_organizer::{auth::Claims, test_helpers::TEST_JWT_SECRET};
use common::Harness;

#[tokio::test]
async fn login_returns_a_verifiable_token() {
    let app = Harness::new().await;

    let (status, body) = app
        .post_json("/auth/login", json!({ "username": "admin", "password": "admin" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);

    let token = body["access_token"].as_str().expect("token should be a string");
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .expect("token should verify")
    .claims;
    assert_eq!(claims.sub, "admin");
}

#[tokio::test]
async fn wrong_credentials_are_unauthorized() {
    let app = Harness::new().await;

    let (status, body) = app
        .post_json("/auth/login", json!({ "username": "admin", "password": "guess" }))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid credentials" }));
}

#[tokio::test]
async fn blank_credentials_are_rejected() {
    let app = Harness::new().await;

    let (status, body) = app.post_json("/auth/login", json!({ "username": "  " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username and password required");
}
