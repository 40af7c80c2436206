use shared_types::AppError;
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// A row of `users`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub user_type: String,
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub area: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
}

/// Fields needed to register a user.
#[derive(Debug, Clone, Default)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: Option<&'a str>,
    pub password_hash: &'a str,
    pub user_type: &'a str,
    pub full_name: Option<&'a str>,
    pub mobile: Option<&'a str>,
    pub area: Option<&'a str>,
    pub state: Option<&'a str>,
    pub zipcode: Option<&'a str>,
}

const COLUMNS: &str =
    "username, email, password_hash, user_type, full_name, mobile, area, state, zipcode";

pub async fn find_by_username(
    pool: &Pool<Postgres>,
    username: &str,
) -> Result<Option<UserRecord>, AppError> {
    sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {COLUMNS} FROM users WHERE username = $1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Match either the username or, case-insensitively, the email.
pub async fn find_by_login(
    pool: &Pool<Postgres>,
    identifier: &str,
) -> Result<Option<UserRecord>, AppError> {
    sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {COLUMNS} FROM users
         WHERE username = $1 OR lower(email) = lower($1)
         ORDER BY (username = $1) DESC
         LIMIT 1"
    ))
    .bind(identifier)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn insert(pool: &Pool<Postgres>, user: &NewUser<'_>) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO users
            (username, email, password_hash, user_type, full_name, mobile, area, state, zipcode)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(user.username)
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.user_type)
    .bind(user.full_name)
    .bind(user.mobile)
    .bind(user.area)
    .bind(user.state)
    .bind(user.zipcode)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}
