use axum::{extract::State, Json};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, LoginRequest, LoginResponse};

/// Sign in with a username (or email) and password.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Missing credentials", body = AppError),
        (status = 401, description = "Invalid credentials", body = AppError)
    ),
    tag = "users"
)]
pub async fn login(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let identifier = body.username.trim();
    if identifier.is_empty() || body.password.is_empty() {
        return Err(AppError::bad_request("Username and password are required"));
    }

    let user = match crate::auth::authenticate(&pool, identifier, &body.password).await {
        Ok(user) => user,
        Err(e) => {
            tracing::info!(identifier, "login rejected");
            return Err(e);
        }
    };

    tracing::info!(username = %user.username, user_type = %user.user_type, "login succeeded");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user_type: user.user_type,
        username: user.username,
        full_name: user.full_name,
    }))
}
