use serde::{Deserialize, Serialize};

/// Persisted-storage key holding the signed-in user's role.
pub const USER_TYPE_KEY: &str = "userType";
/// Persisted-storage key holding the signed-in username.
pub const USERNAME_KEY: &str = "username";

/// Account role as stored in `users.user_type` and the `userType` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Labour,
    Farmer,
    Employee,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Labour => "labour",
            UserRole::Farmer => "farmer",
            UserRole::Employee => "employee",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "labour" => Some(UserRole::Labour),
            "farmer" => Some(UserRole::Farmer),
            "employee" => Some(UserRole::Employee),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// Identity read from persisted storage before anything is fetched. `role`
/// is the raw `userType` value and may name a role this client does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredIdentity {
    pub username: String,
    pub role: String,
}

impl StoredIdentity {
    pub fn known_role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }

    pub fn is_labour(&self) -> bool {
        self.known_role() == Some(UserRole::Labour)
    }
}

/// Response of `GET /api/weather/location`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LocationResponse {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

/// Signed-in user with a resolved location. Lives in page memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub username: String,
    pub role: String,
    pub area: String,
    pub state: String,
}

impl UserSession {
    pub fn new(identity: &StoredIdentity, location: LocationResponse) -> Self {
        Self {
            username: identity.username.clone(),
            role: identity.role.clone(),
            area: location.area,
            state: location.state,
        }
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.area, self.state)
    }
}
