use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Kind of farm work a farmer is hiring for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum WorkType {
    Planting,
    Harvesting,
    Weeding,
    Irrigation,
    Fertilizing,
    PestControl,
    LandPreparation,
    #[default]
    #[serde(other)]
    Other,
}

impl WorkType {
    pub const ALL: [WorkType; 8] = [
        WorkType::Planting,
        WorkType::Harvesting,
        WorkType::Weeding,
        WorkType::Irrigation,
        WorkType::Fertilizing,
        WorkType::PestControl,
        WorkType::LandPreparation,
        WorkType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Planting => "planting",
            WorkType::Harvesting => "harvesting",
            WorkType::Weeding => "weeding",
            WorkType::Irrigation => "irrigation",
            WorkType::Fertilizing => "fertilizing",
            WorkType::PestControl => "pest-control",
            WorkType::LandPreparation => "land-preparation",
            WorkType::Other => "other",
        }
    }

    /// Parse the stored string form; anything unrecognised is `Other`.
    pub fn from_str_or_default(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .unwrap_or_default()
    }

    /// Badge colour for this work type.
    pub fn tone(&self) -> Tone {
        match self {
            WorkType::Planting => Tone::Green,
            WorkType::Harvesting => Tone::Yellow,
            WorkType::Weeding => Tone::Blue,
            WorkType::Irrigation => Tone::Cyan,
            WorkType::Fertilizing => Tone::Purple,
            WorkType::PestControl => Tone::Red,
            WorkType::LandPreparation => Tone::Orange,
            WorkType::Other => Tone::Gray,
        }
    }
}

/// Lifecycle state of a posted farm work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
    /// A status string this client does not know about.
    #[serde(other)]
    Unknown,
}

impl WorkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Active => "active",
            WorkStatus::Completed => "completed",
            WorkStatus::Cancelled => "cancelled",
            WorkStatus::Unknown => "unknown",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "active" => WorkStatus::Active,
            "completed" => WorkStatus::Completed,
            "cancelled" => WorkStatus::Cancelled,
            _ => WorkStatus::Unknown,
        }
    }

    /// Completed or cancelled: the work will not run (again).
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkStatus::Completed | WorkStatus::Cancelled)
    }

    /// Human label used in the work history footer.
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::Active => "Active",
            WorkStatus::Completed => "Completed",
            WorkStatus::Cancelled => "Cancelled",
            WorkStatus::Unknown => "Unknown",
        }
    }

    /// Badge colour for this status. Unknown statuses fall back to blue.
    pub fn tone(&self) -> Tone {
        match self {
            WorkStatus::Active => Tone::Green,
            WorkStatus::Completed => Tone::Gray,
            WorkStatus::Cancelled => Tone::Red,
            WorkStatus::Unknown => Tone::Blue,
        }
    }
}

/// Colour family used by badges and accent panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    Green,
    Yellow,
    #[default]
    Blue,
    Cyan,
    Purple,
    Red,
    Orange,
    Gray,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Yellow => "yellow",
            Tone::Blue => "blue",
            Tone::Cyan => "cyan",
            Tone::Purple => "purple",
            Tone::Red => "red",
            Tone::Orange => "orange",
            Tone::Gray => "gray",
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A labourer's application embedded in a farm work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LabourApplication {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub mobile: String,
    pub labour_username: String,
    pub applied_at: DateTime<Utc>,
}

/// A job posted by a farmer, with every application made against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FarmWork {
    /// Opaque record ID, echoed back verbatim in apply and withdraw requests.
    #[serde(rename = "_id")]
    pub id: String,
    pub farmer_username: String,
    pub crop_name: String,
    pub work_type: WorkType,
    pub labours_required: u32,
    #[serde(with = "work_date")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Date))]
    pub work_date: NaiveDate,
    #[serde(default)]
    pub additional_details: String,
    pub area: String,
    pub state: String,
    pub status: WorkStatus,
    #[serde(default)]
    pub labour_applications: Vec<LabourApplication>,
    pub created_at: DateTime<Utc>,
}

impl FarmWork {
    /// The application `username` made against this work, if any.
    pub fn application_by(&self, username: &str) -> Option<&LabourApplication> {
        self.labour_applications
            .iter()
            .find(|app| app.labour_username == username)
    }

    pub fn has_applied(&self, username: &str) -> bool {
        self.application_by(username).is_some()
    }

    pub fn applied_count(&self) -> usize {
        self.labour_applications.len()
    }

    /// True once the number of applicants reaches the number of labourers required.
    pub fn is_full(&self) -> bool {
        self.applied_count() >= self.labours_required as usize
    }

    /// Active, not yet applied to by `username`, and below capacity.
    pub fn is_open_to(&self, username: &str) -> bool {
        self.status == WorkStatus::Active && !self.has_applied(username) && !self.is_full()
    }

    /// Heading shown on dashboard cards, e.g. "Rice - harvesting".
    pub fn title(&self) -> String {
        format!("{} - {}", self.crop_name, self.work_type.as_str())
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.area, self.state)
    }

    /// Assemble a work from its stored row and its application rows.
    pub fn from_row(row: FarmWorkRow, labour_applications: Vec<LabourApplication>) -> Self {
        Self {
            id: row.id.to_string(),
            farmer_username: row.farmer_username,
            crop_name: row.crop_name,
            work_type: WorkType::from_str_or_default(&row.work_type),
            labours_required: u32::try_from(row.labours_required).unwrap_or(0),
            work_date: row.work_date,
            additional_details: row.additional_details,
            area: row.area,
            state: row.state,
            status: WorkStatus::from_str_or_default(&row.status),
            labour_applications,
            created_at: row.created_at,
        }
    }
}

/// Farm work row as stored in `farm_works`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct FarmWorkRow {
    pub id: Uuid,
    pub farmer_username: String,
    pub crop_name: String,
    pub work_type: String,
    pub labours_required: i32,
    pub work_date: NaiveDate,
    pub additional_details: String,
    pub area: String,
    pub state: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// `YYYY-MM-DD` on the wire. Full ISO timestamps are accepted on input and
/// truncated to their date part.
pub mod work_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid work date: {raw}")))
    }

    /// Parse the leading `YYYY-MM-DD` of a date or timestamp string.
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let date_part = raw.get(..10)?;
        NaiveDate::parse_from_str(date_part, FORMAT).ok()
    }
}
