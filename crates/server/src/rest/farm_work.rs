use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Days, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    can_apply, can_withdraw, local_now, work_date, ActionResponse, AppError, ApplyRequest,
    CancelWorkRequest, CreateFarmWorkRequest, CreateFarmWorkResponse, FarmWork, LabourApplication,
    StatusSweepResponse, WithdrawRequest, WorkStatus, WorksResponse,
};

use crate::error_convert::{SqlxErrorExt, ValidateRequest};
use crate::repo::farm_work::{self as repo, NewFarmWork};

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

pub fn parse_work_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::bad_request("Invalid work ID"))
}

/// A new posting must be dated tomorrow or later.
pub fn check_work_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, AppError> {
    let date = work_date::parse(raw).ok_or_else(|| AppError::bad_request("Invalid work date"))?;
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    if date < tomorrow {
        return Err(AppError::bad_request("Work date must be tomorrow or later"));
    }
    Ok(date)
}

pub fn check_apply(work: &FarmWork, username: &str, now: NaiveDateTime) -> Result<(), AppError> {
    if work.status != WorkStatus::Active {
        return Err(AppError::bad_request("This work is no longer active"));
    }
    if !can_apply(work.work_date, now) {
        return Err(AppError::bad_request(
            "Application deadline has passed (11 PM day before work date)",
        ));
    }
    if work.is_full() {
        return Err(AppError::bad_request(
            "This work has reached maximum applications",
        ));
    }
    if work.has_applied(username) {
        return Err(AppError::bad_request("You have already applied for this work"));
    }
    Ok(())
}

pub fn check_withdraw(work: &FarmWork, username: &str, now: NaiveDateTime) -> Result<(), AppError> {
    if work.status != WorkStatus::Active {
        return Err(AppError::bad_request("Can only withdraw from active works"));
    }
    if !can_withdraw(work.work_date, now) {
        return Err(AppError::bad_request(
            "Cannot withdraw application. Deadline has passed (11:00 PM the day before work date)",
        ));
    }
    if !work.has_applied(username) {
        return Err(AppError::bad_request("You haven't applied for this work"));
    }
    Ok(())
}

/// Only the posting farmer may cancel, and only an active work up to midnight
/// before its date. A work owned by someone else reads as not found.
pub fn check_cancel(work: &FarmWork, farmer: &str, now: NaiveDateTime) -> Result<(), AppError> {
    if work.farmer_username != farmer {
        return Err(AppError::not_found("Work not found or unauthorized"));
    }
    if work.status != WorkStatus::Active {
        return Err(AppError::bad_request("Only active works can be cancelled"));
    }
    if !can_withdraw(work.work_date, now) {
        return Err(AppError::bad_request(
            "Cannot cancel work less than 1 day before the scheduled date",
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /api/farm-works
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct FarmWorksParams {
    /// Farmer whose postings to list.
    pub username: Option<String>,
    pub area: Option<String>,
    pub state: Option<String>,
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

/// List a farmer's works, or the works in an area and state.
#[utoipa::path(
    get,
    path = "/api/farm-works",
    params(FarmWorksParams),
    responses(
        (status = 200, description = "Works, newest first", body = WorksResponse),
        (status = 400, description = "Neither username nor area and state given", body = AppError)
    ),
    tag = "farm-works"
)]
pub async fn list_farm_works(
    State(pool): State<Pool<Postgres>>,
    Query(params): Query<FarmWorksParams>,
) -> Result<Json<WorksResponse>, AppError> {
    let works = match (
        non_blank(params.username),
        non_blank(params.area),
        non_blank(params.state),
    ) {
        (Some(username), _, _) => repo::list_by_farmer(&pool, &username).await?,
        (None, Some(area), Some(state)) => {
            repo::list_by_location(&pool, &area, &state, local_now().date()).await?
        }
        _ => return Err(AppError::bad_request("Missing required parameters")),
    };
    Ok(Json(WorksResponse { works }))
}

// ---------------------------------------------------------------------------
// POST /api/farm-works
// ---------------------------------------------------------------------------

/// Post a new farm work.
#[utoipa::path(
    post,
    path = "/api/farm-works",
    request_body = CreateFarmWorkRequest,
    responses(
        (status = 201, description = "Work posted", body = CreateFarmWorkResponse),
        (status = 400, description = "Invalid work date", body = AppError),
        (status = 404, description = "Unknown farmer", body = AppError),
        (status = 422, description = "Missing or out-of-range fields", body = AppError)
    ),
    tag = "farm-works"
)]
pub async fn create_farm_work(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateFarmWorkRequest>,
) -> Result<(StatusCode, Json<CreateFarmWorkResponse>), AppError> {
    body.validate_request()?;
    let date = check_work_date(&body.work_date, local_now().date())?;

    if crate::repo::user::find_by_username(&pool, &body.farmer_username)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Farmer not found"));
    }

    let labours_required = i32::try_from(body.labours_required)
        .map_err(|_| AppError::bad_request("Number of laborers must be between 1 and 50"))?;
    let id = repo::insert(
        &pool,
        &NewFarmWork {
            farmer_username: &body.farmer_username,
            crop_name: body.crop_name.trim(),
            work_type: &body.work_type,
            labours_required,
            work_date: date,
            additional_details: &body.additional_details,
            area: body.area.trim(),
            state: body.state.trim(),
        },
    )
    .await?;

    tracing::info!(%id, farmer = %body.farmer_username, "farm work posted");
    Ok((
        StatusCode::CREATED,
        Json(CreateFarmWorkResponse {
            success: true,
            work_id: id.to_string(),
        }),
    ))
}

// ---------------------------------------------------------------------------
// POST /api/farm-works/apply
// ---------------------------------------------------------------------------

/// Apply to an active work before its application deadline.
#[utoipa::path(
    post,
    path = "/api/farm-works/apply",
    request_body = ApplyRequest,
    responses(
        (status = 200, description = "Application recorded", body = ActionResponse),
        (status = 400, description = "Missing fields, inactive, closed, full or duplicate", body = AppError),
        (status = 404, description = "Unknown work", body = AppError)
    ),
    tag = "farm-works"
)]
pub async fn apply_for_work(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<ApplyRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    if !body.is_complete() {
        return Err(AppError::bad_request("All fields are required"));
    }
    let work_id = parse_work_id(&body.work_id)?;

    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;
    let work = repo::find_by_id(&mut tx, work_id, true)
        .await?
        .ok_or_else(|| AppError::not_found("Work not found"))?;
    check_apply(&work, &body.labour_username, local_now())?;

    let application = LabourApplication {
        name: body.name.trim().to_string(),
        full_name: body.full_name.filter(|n| !n.trim().is_empty()),
        mobile: body.mobile.trim().to_string(),
        labour_username: body.labour_username.clone(),
        applied_at: Utc::now(),
    };
    repo::add_application(&mut tx, work_id, &application).await?;
    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    tracing::info!(%work_id, labour = %body.labour_username, "application submitted");
    Ok(Json(ActionResponse {
        success: true,
        message: "Application submitted successfully! The farmer will contact you soon."
            .to_string(),
    }))
}

// ---------------------------------------------------------------------------
// POST /api/farm-works/withdraw
// ---------------------------------------------------------------------------

/// Withdraw an application before midnight on the day before the work.
#[utoipa::path(
    post,
    path = "/api/farm-works/withdraw",
    request_body = WithdrawRequest,
    responses(
        (status = 200, description = "Application withdrawn", body = ActionResponse),
        (status = 400, description = "Missing fields, inactive, past deadline or not applied", body = AppError),
        (status = 404, description = "Unknown work", body = AppError)
    ),
    tag = "farm-works"
)]
pub async fn withdraw_application(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<WithdrawRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    if !body.is_complete() {
        return Err(AppError::bad_request(
            "Work ID and labour username are required",
        ));
    }
    let work_id = parse_work_id(&body.work_id)?;

    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;
    let work = repo::find_by_id(&mut tx, work_id, true)
        .await?
        .ok_or_else(|| AppError::not_found("Work not found"))?;
    check_withdraw(&work, &body.labour_username, local_now())?;

    repo::remove_application(&mut tx, work_id, &body.labour_username).await?;
    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    tracing::info!(%work_id, labour = %body.labour_username, "application withdrawn");
    Ok(Json(ActionResponse {
        success: true,
        message: "Application withdrawn successfully.".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// POST /api/farm-works/cancel
// ---------------------------------------------------------------------------

/// Cancel one of the farmer's own active works.
#[utoipa::path(
    post,
    path = "/api/farm-works/cancel",
    request_body = CancelWorkRequest,
    responses(
        (status = 200, description = "Work cancelled", body = ActionResponse),
        (status = 400, description = "Missing fields, inactive or past deadline", body = AppError),
        (status = 404, description = "Unknown work or not owned by the farmer", body = AppError)
    ),
    tag = "farm-works"
)]
pub async fn cancel_work(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CancelWorkRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    if !body.is_complete() {
        return Err(AppError::bad_request(
            "Work ID and farmer username are required",
        ));
    }
    let work_id = parse_work_id(&body.work_id)?;

    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;
    let work = repo::find_by_id(&mut tx, work_id, true)
        .await?
        .ok_or_else(|| AppError::not_found("Work not found or unauthorized"))?;
    check_cancel(&work, &body.farmer_username, local_now())?;

    repo::cancel(&mut tx, work_id).await?;
    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    tracing::info!(
        %work_id,
        farmer = %body.farmer_username,
        applicants = work.applied_count(),
        "farm work cancelled"
    );
    Ok(Json(ActionResponse {
        success: true,
        message: "Work cancelled successfully.".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// POST /api/farm-works/update-status
// ---------------------------------------------------------------------------

/// Mark active works whose date has passed as completed.
#[utoipa::path(
    post,
    path = "/api/farm-works/update-status",
    responses(
        (status = 200, description = "Sweep finished", body = StatusSweepResponse)
    ),
    tag = "farm-works"
)]
pub async fn update_work_status(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<StatusSweepResponse>, AppError> {
    let updated_count = crate::sweep::complete_past_works(&pool).await?;
    Ok(Json(StatusSweepResponse {
        success: true,
        updated_count,
    }))
}
