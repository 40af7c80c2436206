use axum::http::StatusCode;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn test_login_with_username() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "sita", "labour", "Guntur", "Andhra Pradesh", Some("522001")).await;

    let (status, body) = common::post_json(
        &app,
        "/api/login",
        &json!({ "username": "sita", "password": common::PASSWORD }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["userType"], "labour");
    assert_eq!(body["username"], "sita");
}

#[tokio::test]
async fn test_login_with_email_is_case_insensitive() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;

    let (status, body) = common::post_json(
        &app,
        "/api/login",
        &json!({ "username": "RAVI@farmease.test", "password": common::PASSWORD }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "ravi");
    assert_eq!(body["userType"], "farmer");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "sita", "labour", "Guntur", "Andhra Pradesh", Some("522001")).await;

    let (wrong_status, wrong_body) = common::post_json(
        &app,
        "/api/login",
        &json!({ "username": "sita", "password": "not-it" }),
    )
    .await;
    let (ghost_status, ghost_body) = common::post_json(
        &app,
        "/api/login",
        &json!({ "username": "ghost", "password": common::PASSWORD }),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(ghost_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["error"], ghost_body["error"]);
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) =
        common::post_json(&app, "/api/login", &json!({ "username": "sita" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username and password are required");
}
