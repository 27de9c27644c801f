use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Urgency of a hospital's blood request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RequestPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl RequestPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl std::str::FromStr for RequestPriority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Critical" => Ok(Self::Critical),
            other => Err(format!("Unknown request priority '{}'", other)),
        }
    }
}

/// Fulfilment state of a blood request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    #[default]
    Pending,
    Fulfilled,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Fulfilled => "Fulfilled",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pending" => Ok(Self::Pending),
            "Fulfilled" => Ok(Self::Fulfilled),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(format!("Unknown request status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequestDto {
    pub id: i32,
    pub patient_name: String,
    pub blood_type: String,
    pub units_needed: i32,
    pub priority: RequestPriority,
    pub hospital: String,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloodRequestDto {
    pub patient_name: String,
    pub blood_type: String,
    pub units_needed: i32,
    pub priority: RequestPriority,
    pub hospital: String,
    /// Defaults to `Pending` when omitted.
    #[serde(default)]
    pub status: RequestStatus,
}

/// Partial update; omitted fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBloodRequestDto {
    pub patient_name: Option<String>,
    pub blood_type: Option<String>,
    pub units_needed: Option<i32>,
    pub priority: Option<RequestPriority>,
    pub hospital: Option<String>,
    pub status: Option<RequestStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloodRequestResponseDto {
    pub success: bool,
    pub request: BloodRequestDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBloodRequestResponseDto {
    pub success: bool,
    /// `null` when no request matched the given identifier.
    pub request: Option<BloodRequestDto>,
}
