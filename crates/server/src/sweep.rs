//! Closing out works whose date has passed.

use std::time::Duration;

use shared_types::{local_now, AppError};
use sqlx::{Pool, Postgres};

/// How often the background sweep runs when enabled.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Mark every active work dated before today as completed.
pub async fn complete_past_works(pool: &Pool<Postgres>) -> Result<u64, AppError> {
    let updated = crate::repo::farm_work::complete_past_works(pool, local_now().date()).await?;
    if updated > 0 {
        tracing::info!(updated, "completed past-dated farm works");
    }
    Ok(updated)
}

/// Run [`complete_past_works`] now and then every [`SWEEP_INTERVAL`].
pub fn spawn_status_sweep(pool: Pool<Postgres>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(e) = complete_past_works(&pool).await {
                tracing::error!(error = %e, "status sweep failed");
            }
        }
    })
}
