use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{self, day};

fn posting(work_date: &str) -> Value {
    json!({
        "farmerUsername": "ravi",
        "cropName": "Cotton",
        "workType": "weeding",
        "laboursRequired": 5,
        "workDate": work_date,
        "additionalDetails": "Morning shift",
        "area": "Guntur",
        "state": "Andhra Pradesh"
    })
}

#[tokio::test]
async fn test_create_farm_work_success() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;

    let date = day(2).format("%Y-%m-%d").to_string();
    let (status, body) = common::post_json(&app, "/api/farm-works", &posting(&date)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["workId"].as_str().expect("workId");

    let (_, listed) = common::get(&app, "/api/farm-works?username=ravi").await;
    assert_eq!(listed["works"][0]["_id"], id);
    assert_eq!(listed["works"][0]["status"], "active");
    assert_eq!(listed["works"][0]["workDate"], date.as_str());
}

#[tokio::test]
async fn test_create_rejects_today_and_past_dates() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;

    for offset in [0, -1] {
        let date = day(offset).format("%Y-%m-%d").to_string();
        let (status, body) = common::post_json(&app, "/api/farm-works", &posting(&date)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Work date must be tomorrow or later");
    }
}

#[tokio::test]
async fn test_create_rejects_out_of_range_labour_count() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;

    let mut body = posting(&day(2).format("%Y-%m-%d").to_string());
    body["laboursRequired"] = json!(51);
    let (status, response) = common::post_json(&app, "/api/farm-works", &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["field_errors"].get("labours_required").is_some());
}

#[tokio::test]
async fn test_create_requires_known_farmer() {
    let (app, _pool, _guard) = common::test_app().await;

    let date = day(2).format("%Y-%m-%d").to_string();
    let (status, body) = common::post_json(&app, "/api/farm-works", &posting(&date)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Farmer not found");
}
