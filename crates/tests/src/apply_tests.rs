use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{self, day};

fn application(work_id: &str, labour: &str) -> Value {
    json!({
        "workId": work_id,
        "labourUsername": labour,
        "name": "Sita Devi",
        "mobile": "9000000002"
    })
}

async fn seed_farmer(pool: &sqlx::Pool<sqlx::Postgres>) {
    common::create_user(pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
}

#[tokio::test]
async fn test_apply_success_records_application() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 2, "active").await;

    let (status, body) =
        common::post_json(&app, "/api/farm-works/apply", &application(&id.to_string(), "sita"))
            .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Application submitted successfully! The farmer will contact you soon."
    );
    assert_eq!(common::applicant_count(&pool, id).await, 1);
}

#[tokio::test]
async fn test_apply_twice_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 2, "active").await;
    let body = application(&id.to_string(), "sita");

    common::post_json(&app, "/api/farm-works/apply", &body).await;
    let (status, response) = common::post_json(&app, "/api/farm-works/apply", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "You have already applied for this work");
    assert_eq!(common::applicant_count(&pool, id).await, 1);
}

#[tokio::test]
async fn test_apply_to_full_work_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 1, "active").await;
    common::add_applicant(&pool, id, "gopal").await;

    let (status, body) =
        common::post_json(&app, "/api/farm-works/apply", &application(&id.to_string(), "sita"))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "This work has reached maximum applications");
}

#[tokio::test]
async fn test_apply_after_deadline_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(0), 2, "active").await;

    let (status, body) =
        common::post_json(&app, "/api/farm-works/apply", &application(&id.to_string(), "sita"))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Application deadline has passed (11 PM day before work date)"
    );
}

#[tokio::test]
async fn test_apply_to_inactive_work_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 2, "cancelled").await;

    let (status, body) =
        common::post_json(&app, "/api/farm-works/apply", &application(&id.to_string(), "sita"))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "This work is no longer active");
}

#[tokio::test]
async fn test_apply_unknown_work_is_not_found() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/apply",
        &application(&Uuid::new_v4().to_string(), "sita"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Work not found");
}

#[tokio::test]
async fn test_apply_requires_all_fields() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/apply",
        &json!({ "workId": Uuid::new_v4().to_string(), "labourUsername": "sita" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required");
}
