//! Deadlines for withdrawing from and applying to a farm work, and the
//! confirmation flow the dashboard walks through before withdrawing.
//!
//! All times are naive local wall-clock times. Callers pass `now` in so the
//! rules stay pure; [`local_now`] is the production clock.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::farm_work::{FarmWork, WorkType};

/// Current local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn start_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last instant a labourer may withdraw: 23:59:59.999 on the day before the work date.
pub fn withdrawal_deadline(work_date: NaiveDate) -> NaiveDateTime {
    start_of(work_date) - Duration::milliseconds(1)
}

pub fn can_withdraw(work_date: NaiveDate, now: NaiveDateTime) -> bool {
    now <= withdrawal_deadline(work_date)
}

/// Last instant a labourer may apply: 23:00 on the day before the work date.
pub fn application_deadline(work_date: NaiveDate) -> NaiveDateTime {
    start_of(work_date) - Duration::hours(1)
}

pub fn can_apply(work_date: NaiveDate, now: NaiveDateTime) -> bool {
    now <= application_deadline(work_date)
}

/// The work a withdrawal is being confirmed for.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawTarget {
    pub work_id: String,
    pub crop_name: String,
    pub work_type: WorkType,
}

impl WithdrawTarget {
    pub fn from_work(work: &FarmWork) -> Self {
        Self {
            work_id: work.id.clone(),
            crop_name: work.crop_name.clone(),
            work_type: work.work_type,
        }
    }

    /// Body text of the confirmation dialog.
    pub fn confirmation_text(&self) -> String {
        format!(
            "Are you sure you want to withdraw your application for \"{} - {}\"? \
             You can reapply later if the deadline hasn't passed.",
            self.crop_name,
            self.work_type.as_str()
        )
    }
}

/// Withdrawal state machine: `Idle -> Confirming -> Submitting -> Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WithdrawFlow {
    #[default]
    Idle,
    Confirming(WithdrawTarget),
    Submitting(WithdrawTarget),
}

impl WithdrawFlow {
    /// Open the confirmation dialog for `work`. Ignored while a request is in
    /// flight or once the withdrawal deadline has passed.
    pub fn request(&mut self, work: &FarmWork, now: NaiveDateTime) -> bool {
        if matches!(self, WithdrawFlow::Submitting(_)) || !can_withdraw(work.work_date, now) {
            return false;
        }
        *self = WithdrawFlow::Confirming(WithdrawTarget::from_work(work));
        true
    }

    /// Close the dialog without submitting. A submission cannot be cancelled.
    pub fn cancel(&mut self) -> bool {
        if matches!(self, WithdrawFlow::Confirming(_)) {
            *self = WithdrawFlow::Idle;
            true
        } else {
            false
        }
    }

    /// Move from confirming to submitting, returning the work to withdraw from.
    pub fn confirm(&mut self) -> Option<WithdrawTarget> {
        match std::mem::take(self) {
            WithdrawFlow::Confirming(target) => {
                *self = WithdrawFlow::Submitting(target.clone());
                Some(target)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Request finished, successfully or not.
    pub fn finish(&mut self) {
        *self = WithdrawFlow::Idle;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, WithdrawFlow::Idle)
    }

    pub fn target(&self) -> Option<&WithdrawTarget> {
        match self {
            WithdrawFlow::Idle => None,
            WithdrawFlow::Confirming(t) | WithdrawFlow::Submitting(t) => Some(t),
        }
    }

    pub fn is_submitting(&self, work_id: &str) -> bool {
        matches!(self, WithdrawFlow::Submitting(t) if t.work_id == work_id)
    }
}
