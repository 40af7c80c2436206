use axum::extract::FromRef;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<PgPool>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

/// Failure while setting up the database pool.
#[derive(Debug)]
pub enum DbSetupError {
    MissingUrl,
    Pool(sqlx::Error),
    Migrate(sqlx::migrate::MigrateError),
}

impl std::fmt::Display for DbSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbSetupError::MissingUrl => write!(f, "DATABASE_URL must be set"),
            DbSetupError::Pool(e) => write!(f, "failed to create database pool: {e}"),
            DbSetupError::Migrate(e) => write!(f, "failed to run database migrations: {e}"),
        }
    }
}

impl std::error::Error for DbSetupError {}

/// Create a new database connection pool from environment variables.
/// Uses `connect_lazy` so no connections open until the first query.
pub fn create_pool() -> Result<Pool<Postgres>, DbSetupError> {
    // Load .env file if present (ignored in production where env vars are set directly).
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL").map_err(|_| DbSetupError::MissingUrl)?;
    pool_for(&database_url)
}

/// Lazy pool for an explicit URL.
pub fn pool_for(database_url: &str) -> Result<Pool<Postgres>, DbSetupError> {
    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(database_url)
        .map_err(DbSetupError::Pool)
}

/// Run database migrations against the given pool.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), DbSetupError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(DbSetupError::Migrate)
}
