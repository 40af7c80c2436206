pub mod password;

use shared_types::{AppError, UserRole};
use sqlx::{Pool, Postgres};

use crate::repo::user::{self, UserRecord};

/// Look up `identifier` as a username or email and check `password` against
/// the stored hash. Unknown users and wrong passwords are indistinguishable.
pub async fn authenticate(
    pool: &Pool<Postgres>,
    identifier: &str,
    password: &str,
) -> Result<UserRecord, AppError> {
    let Some(record) = user::find_by_login(pool, identifier).await? else {
        return Err(AppError::unauthorized("Invalid credentials"));
    };

    if !password::verify_password(password, &record.password_hash) {
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    if UserRole::parse(&record.user_type).is_none() {
        tracing::warn!(username = %record.username, user_type = %record.user_type, "user has unrecognised role");
    }

    Ok(record)
}
