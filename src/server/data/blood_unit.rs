//! Blood unit data repository for database operations.
//!
//! This module provides the `BloodUnitRepository` for managing inventory records in the
//! database. Units reference donors loosely by ID; no referential integrity is enforced
//! at this layer.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::{
    model::inventory::UnitStatus,
    server::model::inventory::{BloodUnit, CreateBloodUnitParams},
};

#[cfg(test)]
mod test;

/// Repository providing database operations for inventory management.
pub struct BloodUnitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BloodUnitRepository<'a> {
    /// Creates a new BloodUnitRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BloodUnitRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a newly collected unit.
    ///
    /// Inserts a unit with the provided fields and status `Available`. The
    /// expiry date is carried in the parameters, computed when the creation
    /// DTO was converted. The donor reference is stored as-is without an
    /// existence check.
    ///
    /// # Arguments
    /// - `params` - Create parameters containing blood type, donor reference, and dates
    ///
    /// # Returns
    /// - `Ok(BloodUnit)` - The created unit with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateBloodUnitParams) -> Result<BloodUnit, DbErr> {
        let entity = entity::blood_unit::ActiveModel {
            blood_type: ActiveValue::Set(params.blood_type),
            donor_id: ActiveValue::Set(params.donor_id),
            collection_date: ActiveValue::Set(params.collection_date),
            expiry_date: ActiveValue::Set(params.expiry_date),
            status: ActiveValue::Set(UnitStatus::Available.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BloodUnit::from_entity(entity)
    }

    /// Gets all inventory units, most recently recorded first.
    ///
    /// Orders by creation time descending with ID as a tiebreak for units
    /// recorded within the same instant.
    ///
    /// # Returns
    /// - `Ok(Vec<BloodUnit>)` - All unit records
    /// - `Err(DbErr)` - Database error during query, or an unrecognized stored status
    pub async fn get_all(&self) -> Result<Vec<BloodUnit>, DbErr> {
        let entities = entity::prelude::BloodUnit::find()
            .order_by_desc(entity::blood_unit::Column::CreatedAt)
            .order_by_desc(entity::blood_unit::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(BloodUnit::from_entity).collect()
    }

    /// Deletes an inventory unit.
    ///
    /// Deletes the unit with the specified ID. The delete is not checked for
    /// a match, so a nonexistent ID is indistinguishable from a successful
    /// delete.
    ///
    /// # Arguments
    /// - `id` - ID of the unit to delete
    ///
    /// # Returns
    /// - `Ok(())` - Unit deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::BloodUnit::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
