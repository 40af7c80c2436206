//! Data flow for the labour pages: identity, location, job list,
//! classification, and the apply/withdraw mutations.
//!
//! Functions here never touch UI state directly. They return what the page
//! should show plus any [`Notice`]s to surface as toasts, so every path can
//! be exercised against an in-memory [`FarmWorksApi`].

use chrono::{Days, NaiveDate, NaiveDateTime};
use shared_types::{
    can_apply, classify, ApplyRequest, Classification, FarmWork, LocationResponse, LoginRequest,
    StoredIdentity, UserRole, UserSession, WithdrawRequest, WithdrawTarget,
};

use crate::format_helpers::format_date;

use super::api::{ApiError, FarmWorksApi};
use super::session::{bootstrap, remember, require_identity, Bootstrap, IdentityStore};

pub const LOCATION_FAILED: &str = "Failed to load dashboard data";
pub const WORKS_FAILED: &str = "Failed to load work history";
pub const WITHDRAW_SUCCEEDED: &str =
    "Application withdrawn successfully. You can reapply if the deadline hasn't passed.";
pub const WITHDRAW_FAILED: &str = "Failed to withdraw application";
pub const APPLY_SUCCEEDED: &str = "Work applied successfully! The farmer will contact you soon.";
pub const APPLY_FAILED: &str = "Failed to apply for work";
pub const OPPORTUNITIES_FAILED: &str = "Failed to load available works";
pub const LOCATION_FETCH_FAILED: &str = "Failed to fetch location data";
pub const LOGIN_FIELDS_MISSING: &str = "Please fill in all fields";
pub const LOGIN_REJECTED: &str = "Invalid credentials";
pub const LOGIN_UNREACHABLE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message for the toast stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Everything the dashboard renders after a fetch cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub session: Option<UserSession>,
    pub classification: Classification,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub data: DashboardData,
    pub notices: Vec<Notice>,
}

/// Outcome of mounting a labour page.
#[derive(Debug, Clone, PartialEq)]
pub enum Start<T> {
    Redirect,
    Loaded(T),
}

/// Bootstrap, then load. A redirect issues no requests.
pub async fn start(store: &impl IdentityStore, api: &impl FarmWorksApi) -> Start<LoadOutcome> {
    match bootstrap(store).await {
        Bootstrap::Redirect => Start::Redirect,
        Bootstrap::Ready(identity) => Start::Loaded(load_dashboard(api, &identity).await),
    }
}

/// Resolve the user's location, then the jobs there. The two failures are
/// independent: a job-list failure keeps the session.
pub async fn load_dashboard(api: &impl FarmWorksApi, identity: &StoredIdentity) -> LoadOutcome {
    let location = match api.user_location(&identity.username).await {
        Ok(location) => location,
        Err(e) => {
            tracing::warn!(username = %identity.username, error = %e, "location lookup failed");
            return LoadOutcome {
                data: DashboardData::default(),
                notices: vec![Notice::error(LOCATION_FAILED)],
            };
        }
    };

    let session = UserSession::new(identity, location);
    let (classification, notices) = match load_works(api, &session).await {
        Ok(classification) => (classification, Vec::new()),
        Err(notice) => (Classification::default(), vec![notice]),
    };

    LoadOutcome {
        data: DashboardData {
            session: Some(session),
            classification,
        },
        notices,
    }
}

/// Fetch and classify the jobs in the session's area and state.
pub async fn load_works(
    api: &impl FarmWorksApi,
    session: &UserSession,
) -> Result<Classification, Notice> {
    match api.works_in(&session.area, &session.state).await {
        Ok(works) => Ok(classify(&works, &session.username)),
        Err(e) => {
            tracing::warn!(area = %session.area, state = %session.state, error = %e, "job list fetch failed");
            Err(Notice::error(WORKS_FAILED))
        }
    }
}

/// Result of a mutation followed by a re-read of the job list.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub notices: Vec<Notice>,
    /// Fresh classification, when the mutation succeeded and the re-read did too.
    pub refreshed: Option<Classification>,
}

async fn refresh_after_success(
    api: &impl FarmWorksApi,
    session: &UserSession,
    message: String,
) -> MutationOutcome {
    let mut notices = vec![Notice::success(message)];
    let refreshed = match load_works(api, session).await {
        Ok(c) => Some(c),
        Err(notice) => {
            notices.push(notice);
            None
        }
    };
    MutationOutcome { notices, refreshed }
}

/// POST the withdrawal for `target`; on success, re-read the job list.
pub async fn submit_withdrawal(
    api: &impl FarmWorksApi,
    session: &UserSession,
    target: &WithdrawTarget,
) -> MutationOutcome {
    let request = WithdrawRequest {
        work_id: target.work_id.clone(),
        labour_username: session.username.clone(),
    };

    match api.withdraw(&request).await {
        Ok(_) => {
            tracing::info!(work_id = %target.work_id, "application withdrawn");
            refresh_after_success(api, session, WITHDRAW_SUCCEEDED.to_string()).await
        }
        Err(e) => {
            tracing::warn!(work_id = %target.work_id, error = %e, "withdrawal rejected");
            MutationOutcome {
                notices: vec![Notice::error(e.message_or(WITHDRAW_FAILED))],
                refreshed: None,
            }
        }
    }
}

/// Contact details sent with an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantDetails {
    pub name: String,
    pub mobile: String,
}

impl ApplicantDetails {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.mobile.trim().is_empty()
    }
}

/// POST an application for `work`; on success, re-read the opportunities.
pub async fn submit_application(
    api: &impl FarmWorksApi,
    session: &UserSession,
    work: &FarmWork,
    details: &ApplicantDetails,
) -> ApplyOutcome {
    let request = ApplyRequest {
        work_id: work.id.clone(),
        labour_username: session.username.clone(),
        name: details.name.trim().to_string(),
        mobile: details.mobile.trim().to_string(),
        full_name: None,
    };

    match api.apply(&request).await {
        Ok(_) => {
            tracing::info!(work_id = %work.id, "application submitted");
            let mut notices = vec![Notice::success(APPLY_SUCCEEDED)];
            let refreshed = match fetch_opportunities(api, session).await {
                Ok(works) => Some(works),
                Err(notice) => {
                    notices.push(notice);
                    None
                }
            };
            ApplyOutcome { notices, refreshed }
        }
        Err(e) => {
            tracing::warn!(work_id = %work.id, error = %e, "application rejected");
            ApplyOutcome {
                notices: vec![Notice::error(e.message_or(APPLY_FAILED))],
                refreshed: None,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOutcome {
    pub notices: Vec<Notice>,
    pub refreshed: Option<Vec<FarmWork>>,
}

/// Jobs listed on the work opportunities page: active ones not posted by the viewer.
pub fn opportunities<'a>(works: &'a [FarmWork], username: &str) -> Vec<&'a FarmWork> {
    works
        .iter()
        .filter(|w| w.status == shared_types::WorkStatus::Active && w.farmer_username != username)
        .collect()
}

/// Which control an opportunity shows, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyState {
    Applied,
    Closed,
    Open { spots_left: usize },
    Filled,
}

pub fn apply_state(work: &FarmWork, username: &str, now: NaiveDateTime) -> ApplyState {
    let spots_left = (work.labours_required as usize).saturating_sub(work.applied_count());
    if work.has_applied(username) {
        ApplyState::Applied
    } else if !can_apply(work.work_date, now) {
        ApplyState::Closed
    } else if spots_left > 0 {
        ApplyState::Open { spots_left }
    } else {
        ApplyState::Filled
    }
}

/// Deadline line shown under each opportunity.
pub fn deadline_message(work_date: NaiveDate, now: NaiveDateTime) -> String {
    if !can_apply(work_date, now) {
        return "Applications closed at 11:00 PM the day before".to_string();
    }
    let day_before = work_date
        .checked_sub_days(Days::new(1))
        .unwrap_or(work_date);
    format!("Applications close at 11:00 PM on {}", format_date(day_before))
}

/// What the work opportunities page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpportunitiesData {
    pub session: Option<UserSession>,
    pub works: Vec<FarmWork>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpportunitiesOutcome {
    pub data: OpportunitiesData,
    pub notices: Vec<Notice>,
}

/// Same bootstrap and location lookup as the dashboard, then the open jobs.
pub async fn start_opportunities(
    store: &impl IdentityStore,
    api: &impl FarmWorksApi,
) -> Start<OpportunitiesOutcome> {
    let identity = match bootstrap(store).await {
        Bootstrap::Redirect => return Start::Redirect,
        Bootstrap::Ready(identity) => identity,
    };

    let location = match api.user_location(&identity.username).await {
        Ok(location) => location,
        Err(e) => {
            tracing::warn!(username = %identity.username, error = %e, "location lookup failed");
            return Start::Loaded(OpportunitiesOutcome {
                data: OpportunitiesData::default(),
                notices: vec![Notice::error(LOCATION_FAILED)],
            });
        }
    };

    let session = UserSession::new(&identity, location);
    let (works, notices) = match fetch_opportunities(api, &session).await {
        Ok(works) => (works, Vec::new()),
        Err(notice) => (Vec::new(), vec![notice]),
    };

    Start::Loaded(OpportunitiesOutcome {
        data: OpportunitiesData {
            session: Some(session),
            works,
        },
        notices,
    })
}

/// Fetch the jobs in the session's location and keep the open ones.
pub async fn fetch_opportunities(
    api: &impl FarmWorksApi,
    session: &UserSession,
) -> Result<Vec<FarmWork>, Notice> {
    match api.works_in(&session.area, &session.state).await {
        Ok(works) => Ok(opportunities(&works, &session.username)
            .into_iter()
            .cloned()
            .collect()),
        Err(e) => {
            tracing::warn!(area = %session.area, state = %session.state, error = %e, "opportunity fetch failed");
            Err(Notice::error(OPPORTUNITIES_FAILED))
        }
    }
}

/// Weather page: any signed-in role, then the stored location. The error is
/// the server's message when it sent one.
pub async fn start_weather(
    store: &impl IdentityStore,
    api: &impl FarmWorksApi,
) -> Start<Result<LocationResponse, String>> {
    let identity = match require_identity(store).await {
        Bootstrap::Redirect => return Start::Redirect,
        Bootstrap::Ready(identity) => identity,
    };
    Start::Loaded(
        api.user_location(&identity.username)
            .await
            .map_err(|e| e.message_or(LOCATION_FETCH_FAILED)),
    )
}

/// Where a successful sign-in lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignedIn {
    Labour,
    /// Signed in, but this client only has pages for labourers.
    OtherRole(String),
}

/// POST the credentials and, on success, store the returned identity.
pub async fn sign_in(
    store: &impl IdentityStore,
    api: &impl FarmWorksApi,
    username: &str,
    password: &str,
) -> Result<SignedIn, String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(LOGIN_FIELDS_MISSING.to_string());
    }
    let request = LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    };

    match api.login(&request).await {
        Ok(response) => {
            remember(store, &response.username, &response.user_type).await;
            tracing::info!(username = %response.username, role = %response.user_type, "signed in");
            match UserRole::parse(&response.user_type) {
                Some(UserRole::Labour) => Ok(SignedIn::Labour),
                _ => Ok(SignedIn::OtherRole(response.user_type)),
            }
        }
        Err(e @ ApiError::Status { .. }) => Err(e.message_or(LOGIN_REJECTED)),
        Err(e) => {
            tracing::warn!(error = %e, "login request failed");
            Err(LOGIN_UNREACHABLE.to_string())
        }
    }
}
