use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use sqlx::{Pool, Postgres};

use shared_types::{AppError, LocationResponse};

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct LocationParams {
    pub username: Option<String>,
}

/// Area, state and zipcode stored on a user's profile.
#[utoipa::path(
    get,
    path = "/api/weather/location",
    params(LocationParams),
    responses(
        (status = 200, description = "User location", body = LocationResponse),
        (status = 400, description = "Missing username or location", body = AppError),
        (status = 404, description = "Unknown user", body = AppError)
    ),
    tag = "users"
)]
pub async fn get_user_location(
    State(pool): State<Pool<Postgres>>,
    Query(params): Query<LocationParams>,
) -> Result<Json<LocationResponse>, AppError> {
    let username = params
        .username
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("Username is required"))?;

    let user = crate::repo::user::find_by_username(&pool, &username)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let Some(zipcode) = user.zipcode.filter(|z| !z.trim().is_empty()) else {
        tracing::info!(%username, "user has no zipcode on file");
        return Err(AppError::bad_request(
            "User location not found. Please update your profile with zipcode information.",
        ));
    };

    Ok(Json(LocationResponse {
        area: user.area.unwrap_or_default(),
        state: user.state.unwrap_or_default(),
        zipcode: Some(zipcode),
    }))
}
