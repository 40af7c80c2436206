use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::{self, day};

async fn seed_farmer(pool: &sqlx::Pool<sqlx::Postgres>) {
    common::create_user(pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
}

#[tokio::test]
async fn test_withdraw_removes_only_the_callers_application() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 3, "active").await;
    common::add_applicant(&pool, id, "sita").await;
    common::add_applicant(&pool, id, "gopal").await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/withdraw",
        &json!({ "workId": id.to_string(), "labourUsername": "sita" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Application withdrawn successfully.");
    assert_eq!(common::applicant_count(&pool, id).await, 1);
}

#[tokio::test]
async fn test_withdraw_then_reapply_before_deadline() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 1, "active").await;
    common::add_applicant(&pool, id, "sita").await;

    let (status, _) = common::post_json(
        &app,
        "/api/farm-works/withdraw",
        &json!({ "workId": id.to_string(), "labourUsername": "sita" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::post_json(
        &app,
        "/api/farm-works/apply",
        &json!({
            "workId": id.to_string(),
            "labourUsername": "sita",
            "name": "Sita",
            "mobile": "9000000002"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_withdraw_without_application_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 3, "active").await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/withdraw",
        &json!({ "workId": id.to_string(), "labourUsername": "sita" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "You haven't applied for this work");
}

#[tokio::test]
async fn test_withdraw_after_deadline_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(0), 3, "active").await;
    common::add_applicant(&pool, id, "sita").await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/withdraw",
        &json!({ "workId": id.to_string(), "labourUsername": "sita" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot withdraw application. Deadline has passed (11:00 PM the day before work date)"
    );
    assert_eq!(common::applicant_count(&pool, id).await, 1);
}

#[tokio::test]
async fn test_withdraw_from_completed_work_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmer(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 3, "completed").await;
    common::add_applicant(&pool, id, "sita").await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/withdraw",
        &json!({ "workId": id.to_string(), "labourUsername": "sita" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Can only withdraw from active works");
}

#[tokio::test]
async fn test_withdraw_validates_input() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/withdraw",
        &json!({ "workId": "", "labourUsername": "sita" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Work ID and labour username are required");

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/withdraw",
        &json!({ "workId": "not-a-uuid", "labourUsername": "sita" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid work ID");

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/withdraw",
        &json!({ "workId": Uuid::new_v4().to_string(), "labourUsername": "sita" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Work not found");
}
