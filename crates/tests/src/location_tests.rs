use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_location_returns_profile_fields() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "sita", "labour", "Guntur", "Andhra Pradesh", Some("522001")).await;

    let (status, body) = common::get(&app, "/api/weather/location?username=sita").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["area"], "Guntur");
    assert_eq!(body["state"], "Andhra Pradesh");
    assert_eq!(body["zipcode"], "522001");
}

#[tokio::test]
async fn test_location_requires_username() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::get(&app, "/api/weather/location").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username is required");
}

#[tokio::test]
async fn test_location_unknown_user_is_not_found() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::get(&app, "/api/weather/location?username=ghost").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_location_without_zipcode_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "gopal", "labour", "Guntur", "Andhra Pradesh", None).await;

    let (status, body) = common::get(&app, "/api/weather/location?username=gopal").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "User location not found. Please update your profile with zipcode information."
    );
}
