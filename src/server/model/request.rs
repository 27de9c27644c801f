//! Blood request domain model and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::request::{
    BloodRequestDto, CreateBloodRequestDto, RequestPriority, RequestStatus, UpdateBloodRequestDto,
};

/// A hospital's ask for blood units of a given type and urgency.
#[derive(Debug, Clone)]
pub struct BloodRequest {
    pub id: i32,
    pub patient_name: String,
    pub blood_type: String,
    pub units_needed: i32,
    pub priority: RequestPriority,
    pub hospital: String,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
}

impl BloodRequest {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(BloodRequest)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored priority or status string is not a known value
    pub fn from_entity(entity: entity::blood_request::Model) -> Result<Self, DbErr> {
        let priority = entity
            .priority
            .parse::<RequestPriority>()
            .map_err(DbErr::Custom)?;
        let status = entity
            .status
            .parse::<RequestStatus>()
            .map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            patient_name: entity.patient_name,
            blood_type: entity.blood_type,
            units_needed: entity.units_needed,
            priority,
            hospital: entity.hospital,
            status,
            request_date: entity.request_date,
        })
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> BloodRequestDto {
        BloodRequestDto {
            id: self.id,
            patient_name: self.patient_name,
            blood_type: self.blood_type,
            units_needed: self.units_needed,
            priority: self.priority,
            hospital: self.hospital,
            status: self.status,
            request_date: self.request_date,
        }
    }
}

/// Parameters for submitting a new blood request.
#[derive(Debug, Clone)]
pub struct CreateBloodRequestParams {
    pub patient_name: String,
    pub blood_type: String,
    pub units_needed: i32,
    pub priority: RequestPriority,
    pub hospital: String,
    pub status: RequestStatus,
}

impl CreateBloodRequestParams {
    /// Converts the request DTO to creation parameters.
    pub fn from_dto(dto: CreateBloodRequestDto) -> Self {
        Self {
            patient_name: dto.patient_name,
            blood_type: dto.blood_type,
            units_needed: dto.units_needed,
            priority: dto.priority,
            hospital: dto.hospital,
            status: dto.status,
        }
    }
}

/// Parameters for a partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBloodRequestParams {
    pub patient_name: Option<String>,
    pub blood_type: Option<String>,
    pub units_needed: Option<i32>,
    pub priority: Option<RequestPriority>,
    pub hospital: Option<String>,
    pub status: Option<RequestStatus>,
}

impl UpdateBloodRequestParams {
    /// Converts the request DTO to update parameters.
    pub fn from_dto(dto: UpdateBloodRequestDto) -> Self {
        Self {
            patient_name: dto.patient_name,
            blood_type: dto.blood_type,
            units_needed: dto.units_needed,
            priority: dto.priority,
            hospital: dto.hospital,
            status: dto.status,
        }
    }
}
