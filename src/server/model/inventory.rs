//! Blood unit domain model and parameters.
//!
//! The expiry rule lives here: a unit expires a fixed number of days after
//! collection, computed once when the creation DTO is converted to parameters.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;

use crate::model::inventory::{BloodUnitDto, CreateBloodUnitDto, UnitStatus};

/// Shelf life of a collected unit, in days.
pub const SHELF_LIFE_DAYS: i64 = 35;

/// A collected and stored blood unit.
#[derive(Debug, Clone)]
pub struct BloodUnit {
    pub id: i32,
    pub blood_type: String,
    pub donor_id: i32,
    pub collection_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub status: UnitStatus,
    pub created_at: DateTime<Utc>,
}

impl BloodUnit {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(BloodUnit)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status string is not a known `UnitStatus`
    pub fn from_entity(entity: entity::blood_unit::Model) -> Result<Self, DbErr> {
        let status = entity
            .status
            .parse::<UnitStatus>()
            .map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            blood_type: entity.blood_type,
            donor_id: entity.donor_id,
            collection_date: entity.collection_date,
            expiry_date: entity.expiry_date,
            status,
            created_at: entity.created_at,
        })
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> BloodUnitDto {
        BloodUnitDto {
            id: self.id,
            blood_type: self.blood_type,
            donor_id: self.donor_id,
            collection_date: self.collection_date,
            expiry_date: self.expiry_date,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a newly collected unit.
#[derive(Debug, Clone)]
pub struct CreateBloodUnitParams {
    pub blood_type: String,
    pub donor_id: i32,
    pub collection_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl CreateBloodUnitParams {
    /// Converts the request DTO to creation parameters.
    ///
    /// Computes the expiry date as the collection date plus
    /// [`SHELF_LIFE_DAYS`] calendar days.
    pub fn from_dto(dto: CreateBloodUnitDto) -> Self {
        Self {
            blood_type: dto.blood_type,
            donor_id: dto.donor_id,
            collection_date: dto.collection_date,
            expiry_date: dto.collection_date + Duration::days(SHELF_LIFE_DAYS),
        }
    }
}

/// Outcome of recording a unit.
///
/// The unit insert is authoritative; `donor_updated` reports whether the
/// follow-up refresh of the donor's last-donation date went through.
#[derive(Debug, Clone)]
pub struct RecordedBloodUnit {
    pub unit: BloodUnit,
    pub donor_updated: bool,
}
