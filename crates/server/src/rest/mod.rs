pub mod farm_work;
pub mod location;
pub mod login;

use axum::{routing::{get, post}, Router};
use crate::db::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Farm works
        .route(
            "/api/farm-works",
            get(farm_work::list_farm_works).post(farm_work::create_farm_work),
        )
        .route("/api/farm-works/apply", post(farm_work::apply_for_work))
        .route("/api/farm-works/withdraw", post(farm_work::withdraw_application))
        .route("/api/farm-works/cancel", post(farm_work::cancel_work))
        .route("/api/farm-works/update-status", post(farm_work::update_work_status))
        // Users
        .route("/api/weather/location", get(location::get_user_location))
        .route("/api/login", post(login::login))
}
