use axum::http::StatusCode;

use crate::common::{self, day};

#[tokio::test]
async fn test_list_by_location_matches_case_insensitively() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
    common::create_work(&pool, "ravi", "Rice", day(3), 4, "active").await;

    let (status, body) =
        common::get(&app, "/api/farm-works?area=guntur&state=andhra%20pradesh").await;

    assert_eq!(status, StatusCode::OK);
    let works = body["works"].as_array().expect("works array");
    assert_eq!(works.len(), 1);
    assert_eq!(works[0]["cropName"], "Rice");
    assert_eq!(works[0]["workType"], "harvesting");
    assert_eq!(works[0]["status"], "active");
    assert!(works[0]["_id"].is_string());
}

#[tokio::test]
async fn test_list_by_location_hides_stale_active_works_but_keeps_history() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
    common::create_work(&pool, "ravi", "Stale", day(-2), 2, "active").await;
    common::create_work(&pool, "ravi", "Done", day(-5), 2, "completed").await;
    common::create_work(&pool, "ravi", "Today", day(0), 2, "active").await;

    let (status, body) =
        common::get(&app, "/api/farm-works?area=Guntur&state=Andhra%20Pradesh").await;

    assert_eq!(status, StatusCode::OK);
    let mut crops: Vec<&str> = body["works"]
        .as_array()
        .expect("works array")
        .iter()
        .filter_map(|w| w["cropName"].as_str())
        .collect();
    crops.sort();
    assert_eq!(crops, vec!["Done", "Today"]);
}

#[tokio::test]
async fn test_list_by_location_treats_wildcards_literally() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
    common::create_work(&pool, "ravi", "Rice", day(3), 4, "active").await;

    let (status, body) = common::get(&app, "/api/farm-works?area=%25&state=%25").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["works"].as_array().expect("works array").is_empty());
}

#[tokio::test]
async fn test_list_embeds_applications() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 4, "active").await;
    common::add_applicant(&pool, id, "sita").await;

    let (_, body) = common::get(&app, "/api/farm-works?area=Guntur&state=Andhra%20Pradesh").await;

    let applications = body["works"][0]["labourApplications"]
        .as_array()
        .expect("applications array");
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["labourUsername"], "sita");
    assert!(applications[0]["appliedAt"].is_string());
}

#[tokio::test]
async fn test_list_by_farmer_returns_own_works_newest_first() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
    common::create_user(&pool, "mohan", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
    common::create_work(&pool, "ravi", "First", day(3), 2, "active").await;
    common::create_work(&pool, "ravi", "Second", day(4), 2, "active").await;
    common::create_work(&pool, "mohan", "Other", day(4), 2, "active").await;

    let (status, body) = common::get(&app, "/api/farm-works?username=ravi").await;

    assert_eq!(status, StatusCode::OK);
    let crops: Vec<&str> = body["works"]
        .as_array()
        .expect("works array")
        .iter()
        .filter_map(|w| w["cropName"].as_str())
        .collect();
    assert_eq!(crops, vec!["Second", "First"]);
}

#[tokio::test]
async fn test_list_without_filters_is_rejected() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::get(&app, "/api/farm-works?area=Guntur").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameters");
}

#[tokio::test]
async fn test_cancelled_work_stays_in_labour_history() {
    let (app, pool, _guard) = common::test_app().await;
    common::create_user(&pool, "ravi", "farmer", "Guntur", "Andhra Pradesh", Some("522001")).await;
    let id = common::create_work(&pool, "ravi", "Rice", day(3), 4, "active").await;
    common::add_applicant(&pool, id, "sita").await;

    let (status, _) = common::post_json(
        &app,
        "/api/farm-works/cancel",
        &serde_json::json!({ "workId": id.to_string(), "farmerUsername": "ravi" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        common::get(&app, "/api/farm-works?area=Guntur&state=Andhra%20Pradesh").await;

    assert_eq!(status, StatusCode::OK);
    let works = body["works"].as_array().expect("works array");
    assert_eq!(works.len(), 1);
    assert_eq!(works[0]["status"], "cancelled");
    assert_eq!(works[0]["labourApplications"][0]["labourUsername"], "sita");
}
