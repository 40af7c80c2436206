use axum::Router;
use shared_types::{
    ActionResponse, AppError, AppErrorKind, ApplyRequest, CancelWorkRequest, CreateFarmWorkRequest,
    CreateFarmWorkResponse, FarmWork, LabourApplication, LocationResponse, LoginRequest,
    LoginResponse, StatusSweepResponse, UserRole, WithdrawRequest, WorkStatus, WorkType,
    WorksResponse,
};
use sqlx::{Pool, Postgres};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;

/// OpenAPI documentation for the FarmEase API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::farm_work::list_farm_works,
        rest::farm_work::create_farm_work,
        rest::farm_work::apply_for_work,
        rest::farm_work::withdraw_application,
        rest::farm_work::cancel_work,
        rest::farm_work::update_work_status,
        rest::location::get_user_location,
        rest::login::login,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        FarmWork,
        LabourApplication,
        WorkType,
        WorkStatus,
        WorksResponse,
        CreateFarmWorkRequest,
        CreateFarmWorkResponse,
        ApplyRequest,
        WithdrawRequest,
        CancelWorkRequest,
        ActionResponse,
        StatusSweepResponse,
        LocationResponse,
        LoginRequest,
        LoginResponse,
        UserRole,
        health::HealthReport,
    )),
    tags(
        (name = "farm-works", description = "Farm work postings and labour applications"),
        (name = "users", description = "Sign-in and user profile lookups"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "FarmEase API",
        description = "Farm labour marketplace API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`,
/// the REST API at `/api/*` and `/health`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(AppState { pool })
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
