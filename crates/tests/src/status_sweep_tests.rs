use axum::http::StatusCode;
use serde_json::json;

use crate::common::{self, day};

#[tokio::test]
async fn test_update_status_completes_only_past_active_works() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
    let past = common::create_work(&pool, "ravi", "Past", day(-1), 2, "active").await;
    let today = common::create_work(&pool, "ravi", "Today", day(0), 2, "active").await;
    let cancelled = common::create_work(&pool, "ravi", "Cancelled", day(-3), 2, "cancelled").await;

    let (status, body) = common::post_json(&app, "/api/farm-works/update-status", &json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["updatedCount"], 1);

    let status_of = |id: uuid::Uuid| {
        let pool = pool.clone();
        async move {
            sqlx::query_scalar::<_, String>("SELECT status FROM farm_works WHERE id = $1")
                .bind(id)
                .fetch_one(&pool)
                .await
                .expect("status")
        }
    };
    assert_eq!(status_of(past).await, "completed");
    assert_eq!(status_of(today).await, "active");
    assert_eq!(status_of(cancelled).await, "cancelled");
}
