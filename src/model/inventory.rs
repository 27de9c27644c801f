use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a stored blood unit.
///
/// Units are never transitioned automatically; there is no background sweep
/// that marks units `Expired` once their expiry date passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UnitStatus {
    Available,
    Used,
    Expired,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Used => "Used",
            Self::Expired => "Expired",
        }
    }
}

impl std::str::FromStr for UnitStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Available" => Ok(Self::Available),
            "Used" => Ok(Self::Used),
            "Expired" => Ok(Self::Expired),
            other => Err(format!("Unknown unit status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodUnitDto {
    pub id: i32,
    pub blood_type: String,
    /// Loose reference to a donor; may point to a donor that no longer exists.
    pub donor_id: i32,
    pub collection_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub status: UnitStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloodUnitDto {
    pub blood_type: String,
    pub donor_id: i32,
    pub collection_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloodUnitResponseDto {
    pub success: bool,
    pub blood_unit: BloodUnitDto,
    /// Whether the referenced donor's last-donation date was refreshed.
    ///
    /// `false` when the donor does not exist or the refresh failed; the unit
    /// itself is persisted either way.
    pub donor_updated: bool,
}
