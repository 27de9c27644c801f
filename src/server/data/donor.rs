//! Donor data repository for database operations.
//!
//! This module provides the `DonorRepository` for managing donor records in the database.
//! It handles donor registration, listing, deletion, and the last-donation refresh with
//! proper conversion between entity models and domain models at the infrastructure boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::donor::{CreateDonorParams, Donor};

#[cfg(test)]
mod test;

/// Repository providing database operations for donor management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting donor records.
pub struct DonorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorRepository<'a> {
    /// Creates a new DonorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DonorRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new donor.
    ///
    /// Inserts a donor record with the provided fields. `last_donation` starts
    /// out null and `created_at` is set to the current time.
    ///
    /// # Arguments
    /// - `params` - Create parameters containing the donor's contact fields
    ///
    /// # Returns
    /// - `Ok(Donor)` - The created donor with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateDonorParams) -> Result<Donor, DbErr> {
        let entity = entity::donor::ActiveModel {
            name: ActiveValue::Set(params.name),
            blood_type: ActiveValue::Set(params.blood_type),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            address: ActiveValue::Set(params.address),
            last_donation: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Donor::from_entity(entity))
    }

    /// Gets all donors, most recently registered first.
    ///
    /// Orders by creation time descending with ID as a tiebreak for donors
    /// registered within the same instant.
    ///
    /// # Returns
    /// - `Ok(Vec<Donor>)` - All donor records
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Donor>, DbErr> {
        let entities = entity::prelude::Donor::find()
            .order_by_desc(entity::donor::Column::CreatedAt)
            .order_by_desc(entity::donor::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Donor::from_entity).collect())
    }

    /// Sets a donor's last-donation date.
    ///
    /// Looks the donor up by ID and stores the given date. Used as the
    /// follow-up to recording an inventory unit.
    ///
    /// # Arguments
    /// - `id` - ID of the donor to refresh
    /// - `date` - Collection date of the newly recorded unit
    ///
    /// # Returns
    /// - `Ok(true)` - Donor found and updated
    /// - `Ok(false)` - No donor exists with the specified ID
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn set_last_donation(&self, id: i32, date: DateTime<Utc>) -> Result<bool, DbErr> {
        let Some(donor) = entity::prelude::Donor::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active_model: entity::donor::ActiveModel = donor.into();
        active_model.last_donation = ActiveValue::Set(Some(date));
        active_model.update(self.db).await?;

        Ok(true)
    }

    /// Deletes a donor.
    ///
    /// Deletes the donor with the specified ID. The delete is not checked for
    /// a match, so a nonexistent ID is indistinguishable from a successful
    /// delete.
    ///
    /// # Arguments
    /// - `id` - ID of the donor to delete
    ///
    /// # Returns
    /// - `Ok(())` - Donor deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Donor::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
