use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::farm_work::FarmWork;

/// Response of `GET /api/farm-works`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WorksResponse {
    #[serde(default)]
    pub works: Vec<FarmWork>,
}

/// Request DTO for posting a new farm work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase", default)]
pub struct CreateFarmWorkRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Farmer username is required"))
    )]
    pub farmer_username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Crop name is required"))
    )]
    pub crop_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Work type is required"))
    )]
    pub work_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 50, message = "Number of laborers must be between 1 and 50"))
    )]
    pub labours_required: u32,
    /// `YYYY-MM-DD`.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 10, message = "Work date is required"))
    )]
    pub work_date: String,
    pub additional_details: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Area is required"))
    )]
    pub area: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "State is required"))
    )]
    pub state: String,
}

/// Response after creating a farm work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateFarmWorkResponse {
    pub success: bool,
    pub work_id: String,
}

/// Request body of `POST /api/farm-works/apply`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ApplyRequest {
    pub work_id: String,
    pub labour_username: String,
    pub name: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl ApplyRequest {
    pub fn is_complete(&self) -> bool {
        [&self.work_id, &self.labour_username, &self.name, &self.mobile]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

/// Request body of `POST /api/farm-works/withdraw`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct WithdrawRequest {
    pub work_id: String,
    pub labour_username: String,
}

impl WithdrawRequest {
    pub fn is_complete(&self) -> bool {
        !self.work_id.trim().is_empty() && !self.labour_username.trim().is_empty()
    }
}

/// Request body of `POST /api/farm-works/cancel`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct CancelWorkRequest {
    pub work_id: String,
    pub farmer_username: String,
}

impl CancelWorkRequest {
    pub fn is_complete(&self) -> bool {
        !self.work_id.trim().is_empty() && !self.farmer_username.trim().is_empty()
    }
}

/// Generic success body for apply, withdraw and cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

/// Response of the status sweep that completes past-dated works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StatusSweepResponse {
    pub success: bool,
    pub updated_count: u64,
}

/// Request body of `POST /api/login`. `username` may also be an email address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user_type: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}
