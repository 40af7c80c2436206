use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Days, NaiveDate};
use serde_json::Value;
use shared_types::local_now;
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

/// Serializes tests against the shared database.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

pub const PASSWORD: &str = "harvest-2025";

/// Router over a freshly truncated database. Hold the guard for the whole test.
pub async fn test_app() -> (Router, Pool<Postgres>, tokio::sync::MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();

    let database_url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL must be set for tests");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    server::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE users, farm_works, labour_applications CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    let state = server::db::AppState { pool: pool.clone() };
    let router = server::rest::api_router().with_state(state);

    (router, pool, guard)
}

/// Today in the server's local calendar, shifted by `offset` days.
pub fn day(offset: i64) -> NaiveDate {
    let today = local_now().date();
    if offset >= 0 {
        today + Days::new(offset as u64)
    } else {
        today - Days::new(offset.unsigned_abs())
    }
}

/// Insert a user with [`PASSWORD`]. `zipcode` of `None` leaves the location unset.
pub async fn create_user(
    pool: &Pool<Postgres>,
    username: &str,
    user_type: &str,
    area: &str,
    state: &str,
    zipcode: Option<&str>,
) {
    let hash = server::auth::password::hash_password(PASSWORD).expect("hash");
    sqlx::query(
        "INSERT INTO users (username, email, password_hash, user_type, full_name, mobile, area, state, zipcode)
         VALUES ($1, $2, $3, $4, $5, '9000000000', $6, $7, $8)",
    )
    .bind(username)
    .bind(format!("{username}@farmease.test"))
    .bind(hash)
    .bind(user_type)
    .bind(format!("{username} full"))
    .bind(area)
    .bind(state)
    .bind(zipcode)
    .execute(pool)
    .await
    .expect("Failed to seed user");
}

/// Insert a work directly, bypassing the create endpoint's date rule.
pub async fn create_work(
    pool: &Pool<Postgres>,
    farmer: &str,
    crop: &str,
    work_date: NaiveDate,
    labours_required: i32,
    status: &str,
) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO farm_works
            (id, farmer_username, crop_name, work_type, labours_required, work_date,
             additional_details, area, state, status)
         VALUES ($1, $2, $3, 'harvesting', $4, $5, 'Bring gloves', 'Guntur', 'Andhra Pradesh', $6)",
    )
    .bind(id)
    .bind(farmer)
    .bind(crop)
    .bind(labours_required)
    .bind(work_date)
    .bind(status)
    .execute(pool)
    .await
    .expect("Failed to seed farm work");
    id
}

/// Record an application straight in the table.
pub async fn add_applicant(pool: &Pool<Postgres>, work_id: Uuid, labour: &str) {
    sqlx::query(
        "INSERT INTO labour_applications (work_id, labour_username, name, mobile)
         VALUES ($1, $2, $2, '9000000001')",
    )
    .bind(work_id)
    .bind(labour)
    .execute(pool)
    .await
    .expect("Failed to seed application");
}

pub async fn applicant_count(pool: &Pool<Postgres>, work_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM labour_applications WHERE work_id = $1")
        .bind(work_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count applications")
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}
