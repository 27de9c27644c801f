//! Donor domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::donor::{CreateDonorDto, DonorDto};

/// A registered blood donor.
#[derive(Debug, Clone)]
pub struct Donor {
    pub id: i32,
    pub name: String,
    pub blood_type: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Null until the first inventory unit referencing this donor is recorded.
    pub last_donation: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Donor {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::donor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            blood_type: entity.blood_type,
            phone: entity.phone,
            email: entity.email,
            address: entity.address,
            last_donation: entity.last_donation,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> DonorDto {
        DonorDto {
            id: self.id,
            name: self.name,
            blood_type: self.blood_type,
            phone: self.phone,
            email: self.email,
            address: self.address,
            last_donation: self.last_donation,
            created_at: self.created_at,
        }
    }
}

/// Parameters for registering a new donor.
#[derive(Debug, Clone)]
pub struct CreateDonorParams {
    pub name: String,
    pub blood_type: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl CreateDonorParams {
    /// Converts the request DTO to creation parameters.
    pub fn from_dto(dto: CreateDonorDto) -> Self {
        Self {
            name: dto.name,
            blood_type: dto.blood_type,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
        }
    }
}
