use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::{self, day};

async fn seed_farmers(pool: &sqlx::Pool<sqlx::Postgres>) {
    common::create_user(pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
    common::create_user(pool, "mohan", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
}

async fn status_of(pool: &sqlx::Pool<sqlx::Postgres>, id: Uuid) -> String {
    sqlx::query_scalar("SELECT status FROM farm_works WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to read status")
}

#[tokio::test]
async fn test_cancel_marks_work_cancelled_and_keeps_applications() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmers(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 3, "active").await;
    common::add_applicant(&pool, id, "sita").await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/cancel",
        &json!({ "workId": id.to_string(), "farmerUsername": "ravi" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Work cancelled successfully.");
    assert_eq!(status_of(&pool, id).await, "cancelled");
    assert_eq!(common::applicant_count(&pool, id).await, 1);

    let cancelled_at: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT cancelled_at FROM farm_works WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .expect("Failed to read cancelled_at");
    assert!(cancelled_at.is_some());
}

#[tokio::test]
async fn test_cancel_by_another_farmer_is_not_found() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmers(&pool).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 3, "active").await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/cancel",
        &json!({ "workId": id.to_string(), "farmerUsername": "mohan" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Work not found or unauthorized");
    assert_eq!(status_of(&pool, id).await, "active");
}

#[tokio::test]
async fn test_cancel_unknown_work_is_not_found() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmers(&pool).await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/cancel",
        &json!({ "workId": Uuid::new_v4().to_string(), "farmerUsername": "ravi" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Work not found or unauthorized");
}

#[tokio::test]
async fn test_cancel_rejects_inactive_and_late_works() {
    let (app, pool, _guard) = common::test_app().await;
    seed_farmers(&pool).await;
    let done = common::create_work(&pool, "ravi", "Done", day(3), 3, "completed").await;
    let today_work = common::create_work(&pool, "ravi", "Today", day(0), 3, "active").await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/cancel",
        &json!({ "workId": done.to_string(), "farmerUsername": "ravi" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Only active works can be cancelled");

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/cancel",
        &json!({ "workId": today_work.to_string(), "farmerUsername": "ravi" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot cancel work less than 1 day before the scheduled date"
    );
    assert_eq!(status_of(&pool, today_work).await, "active");
}

#[tokio::test]
async fn test_cancel_requires_both_fields() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/api/farm-works/cancel",
        &json!({ "workId": Uuid::new_v4().to_string() }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Work ID and farmer username are required");
}
