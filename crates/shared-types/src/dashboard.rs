use serde::{Deserialize, Serialize};

use crate::farm_work::{FarmWork, WorkStatus};

/// Summary counters shown at the top of the labour dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_applications: usize,
    pub completed_works: usize,
    pub available_jobs: usize,
}

/// A job list partitioned from one labourer's point of view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    /// Active works the labourer has applied to.
    pub active: Vec<FarmWork>,
    /// Completed or cancelled works the labourer applied to.
    pub past: Vec<FarmWork>,
    /// Active works with free slots that the labourer has not applied to.
    pub available: Vec<FarmWork>,
    pub stats: DashboardStats,
}

/// Partition `works` for `username`. Server order is kept inside each bucket.
pub fn classify(works: &[FarmWork], username: &str) -> Classification {
    let mut active = Vec::new();
    let mut past = Vec::new();
    let mut available = Vec::new();

    for work in works {
        if work.has_applied(username) {
            match work.status {
                WorkStatus::Active => active.push(work.clone()),
                status if status.is_terminal() => past.push(work.clone()),
                _ => {}
            }
        } else if work.is_open_to(username) {
            available.push(work.clone());
        }
    }

    let stats = DashboardStats {
        active_applications: active.len(),
        completed_works: past.len(),
        available_jobs: available.len(),
    };

    Classification {
        active,
        past,
        available,
        stats,
    }
}
