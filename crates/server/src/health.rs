use std::sync::OnceLock;
use std::time::{Duration, Instant};

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use sqlx::{Pool, Postgres};

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Pin the instant uptime is measured from. Later calls are no-ops.
pub fn record_start_time() {
    STARTED.get_or_init(Instant::now);
}

fn uptime() -> Duration {
    STARTED.get().map(Instant::elapsed).unwrap_or_default()
}

/// Body of `GET /health`. `error` is only present when the ping failed.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_ms: Option<u64>,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Turn a database ping outcome into the status and body to send.
pub fn report(ping: Result<Duration, String>, uptime: Duration) -> (StatusCode, HealthReport) {
    let version = env!("CARGO_PKG_VERSION").to_string();
    let uptime_seconds = uptime.as_secs();
    match ping {
        Ok(elapsed) => (
            StatusCode::OK,
            HealthReport {
                message: "Database ping successful".to_string(),
                error: None,
                ping_ms: Some(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)),
                uptime_seconds,
                version,
            },
        ),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            HealthReport {
                message: "Database ping failed".to_string(),
                error: Some(error),
                ping_ms: None,
                uptime_seconds,
                version,
            },
        ),
    }
}

async fn ping(pool: &Pool<Postgres>) -> Result<Duration, String> {
    let started = Instant::now();
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| started.elapsed())
        .map_err(|e| e.to_string())
}

/// Ping Postgres; 500 when it cannot be reached.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable", body = HealthReport),
        (status = 500, description = "Database ping failed", body = HealthReport)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> (StatusCode, Json<HealthReport>) {
    let outcome = ping(&pool).await;
    if let Err(e) = &outcome {
        tracing::error!(error = %e, "database ping failed");
    }
    let (status, body) = report(outcome, uptime());
    (status, Json(body))
}
