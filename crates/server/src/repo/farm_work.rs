use std::collections::HashMap;

use chrono::NaiveDate;
use shared_types::{AppError, FarmWork, FarmWorkRow, LabourApplication, WorkStatus};
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const WORK_COLUMNS: &str = "id, farmer_username, crop_name, work_type, labours_required, \
     work_date, additional_details, area, state, status, created_at";

#[derive(sqlx::FromRow)]
struct ApplicationRow {
    work_id: Uuid,
    #[sqlx(flatten)]
    application: LabourApplication,
}

/// Validated input for a new work posting.
#[derive(Debug, Clone)]
pub struct NewFarmWork<'a> {
    pub farmer_username: &'a str,
    pub crop_name: &'a str,
    pub work_type: &'a str,
    pub labours_required: i32,
    pub work_date: NaiveDate,
    pub additional_details: &'a str,
    pub area: &'a str,
    pub state: &'a str,
}

/// Escape `%`, `_` and `\` so `needle` matches literally inside an ILIKE pattern.
pub fn like_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

async fn with_applications(
    conn: &mut PgConnection,
    rows: Vec<FarmWorkRow>,
) -> Result<Vec<FarmWork>, AppError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
    let apps = sqlx::query_as::<_, ApplicationRow>(
        "SELECT work_id, name, full_name, mobile, labour_username, applied_at
         FROM labour_applications
         WHERE work_id = ANY($1)
         ORDER BY applied_at",
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let mut by_work: HashMap<Uuid, Vec<LabourApplication>> = HashMap::new();
    for row in apps {
        by_work.entry(row.work_id).or_default().push(row.application);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let apps = by_work.remove(&row.id).unwrap_or_default();
            FarmWork::from_row(row, apps)
        })
        .collect())
}

/// Works posted by one farmer, newest first.
#[tracing::instrument(skip(pool))]
pub async fn list_by_farmer(
    pool: &Pool<Postgres>,
    farmer_username: &str,
) -> Result<Vec<FarmWork>, AppError> {
    let mut conn = pool.acquire().await.map_err(SqlxErrorExt::into_app_error)?;
    let rows = sqlx::query_as::<_, FarmWorkRow>(&format!(
        "SELECT {WORK_COLUMNS} FROM farm_works
         WHERE farmer_username = $1
         ORDER BY created_at DESC"
    ))
    .bind(farmer_username)
    .fetch_all(&mut *conn)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    with_applications(&mut conn, rows).await
}

/// Works whose area and state contain the given text (case-insensitive),
/// newest first. Active works dated before `today` are left out.
#[tracing::instrument(skip(pool))]
pub async fn list_by_location(
    pool: &Pool<Postgres>,
    area: &str,
    state: &str,
    today: NaiveDate,
) -> Result<Vec<FarmWork>, AppError> {
    let mut conn = pool.acquire().await.map_err(SqlxErrorExt::into_app_error)?;
    let rows = sqlx::query_as::<_, FarmWorkRow>(&format!(
        "SELECT {WORK_COLUMNS} FROM farm_works
         WHERE area ILIKE $1 AND state ILIKE $2
           AND (status <> 'active' OR work_date >= $3)
         ORDER BY created_at DESC"
    ))
    .bind(like_pattern(area))
    .bind(like_pattern(state))
    .bind(today)
    .fetch_all(&mut *conn)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    with_applications(&mut conn, rows).await
}

/// Load one work with its applications. With `lock`, the work row is held
/// `FOR UPDATE` until the surrounding transaction ends.
pub async fn find_by_id(
    conn: &mut PgConnection,
    id: Uuid,
    lock: bool,
) -> Result<Option<FarmWork>, AppError> {
    let suffix = if lock { " FOR UPDATE" } else { "" };
    let row = sqlx::query_as::<_, FarmWorkRow>(&format!(
        "SELECT {WORK_COLUMNS} FROM farm_works WHERE id = $1{suffix}"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let Some(row) = row else {
        return Ok(None);
    };
    Ok(with_applications(conn, vec![row]).await?.pop())
}

#[tracing::instrument(skip(pool, work), fields(farmer = %work.farmer_username))]
pub async fn insert(pool: &Pool<Postgres>, work: &NewFarmWork<'_>) -> Result<Uuid, AppError> {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO farm_works
            (id, farmer_username, crop_name, work_type, labours_required, work_date,
             additional_details, area, state, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(id)
    .bind(work.farmer_username)
    .bind(work.crop_name)
    .bind(work.work_type)
    .bind(work.labours_required)
    .bind(work.work_date)
    .bind(work.additional_details)
    .bind(work.area)
    .bind(work.state)
    .bind(WorkStatus::Active.as_str())
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(id)
}

pub async fn add_application(
    conn: &mut PgConnection,
    work_id: Uuid,
    application: &LabourApplication,
) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO labour_applications
            (work_id, labour_username, name, full_name, mobile, applied_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(work_id)
    .bind(&application.labour_username)
    .bind(&application.name)
    .bind(&application.full_name)
    .bind(&application.mobile)
    .bind(application.applied_at)
    .execute(conn)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}

/// Returns the number of applications removed (0 or 1).
pub async fn remove_application(
    conn: &mut PgConnection,
    work_id: Uuid,
    labour_username: &str,
) -> Result<u64, AppError> {
    let result = sqlx::query(
        "DELETE FROM labour_applications WHERE work_id = $1 AND labour_username = $2",
    )
    .bind(work_id)
    .bind(labour_username)
    .execute(conn)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected())
}

/// Mark a work cancelled and stamp when it happened.
pub async fn cancel(conn: &mut PgConnection, id: Uuid) -> Result<(), AppError> {
    sqlx::query("UPDATE farm_works SET status = $1, cancelled_at = now() WHERE id = $2")
        .bind(WorkStatus::Cancelled.as_str())
        .bind(id)
        .execute(conn)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}

/// Mark active works dated before `today` as completed.
#[tracing::instrument(skip(pool))]
pub async fn complete_past_works(pool: &Pool<Postgres>, today: NaiveDate) -> Result<u64, AppError> {
    let result = sqlx::query("UPDATE farm_works SET status = $1 WHERE status = $2 AND work_date < $3")
        .bind(WorkStatus::Completed.as_str())
        .bind(WorkStatus::Active.as_str())
        .bind(today)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected())
}
