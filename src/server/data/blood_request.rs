//! Blood request data repository for database operations.
//!
//! This module provides the `BloodRequestRepository` for managing hospital request
//! records in the database, including the partial update used by the PUT endpoint.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::request::{
    BloodRequest, CreateBloodRequestParams, UpdateBloodRequestParams,
};

#[cfg(test)]
mod test;

/// Repository providing database operations for blood request management.
pub struct BloodRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BloodRequestRepository<'a> {
    /// Creates a new BloodRequestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BloodRequestRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new blood request.
    ///
    /// Inserts a request record with the provided fields; `request_date` is
    /// set to the current time.
    ///
    /// # Arguments
    /// - `params` - Create parameters containing the request fields
    ///
    /// # Returns
    /// - `Ok(BloodRequest)` - The created request with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateBloodRequestParams) -> Result<BloodRequest, DbErr> {
        let entity = entity::blood_request::ActiveModel {
            patient_name: ActiveValue::Set(params.patient_name),
            blood_type: ActiveValue::Set(params.blood_type),
            units_needed: ActiveValue::Set(params.units_needed),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            hospital: ActiveValue::Set(params.hospital),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            request_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BloodRequest::from_entity(entity)
    }

    /// Gets all blood requests, most recently submitted first.
    ///
    /// Orders by request time descending with ID as a tiebreak for requests
    /// submitted within the same instant.
    ///
    /// # Returns
    /// - `Ok(Vec<BloodRequest>)` - All request records
    /// - `Err(DbErr)` - Database error during query, or an unrecognized stored value
    pub async fn get_all(&self) -> Result<Vec<BloodRequest>, DbErr> {
        let entities = entity::prelude::BloodRequest::find()
            .order_by_desc(entity::blood_request::Column::RequestDate)
            .order_by_desc(entity::blood_request::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(BloodRequest::from_entity)
            .collect()
    }

    /// Applies a partial update to a blood request.
    ///
    /// Replaces only the fields present in the parameters, leaving the rest
    /// untouched. Returns the post-update record.
    ///
    /// # Arguments
    /// - `id` - ID of the request to update
    /// - `params` - Update parameters; `None` fields are skipped
    ///
    /// # Returns
    /// - `Ok(Some(BloodRequest))` - The updated request
    /// - `Ok(None)` - No request exists with the specified ID
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBloodRequestParams,
    ) -> Result<Option<BloodRequest>, DbErr> {
        let Some(request) = entity::prelude::BloodRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let has_changes = params.patient_name.is_some()
            || params.blood_type.is_some()
            || params.units_needed.is_some()
            || params.priority.is_some()
            || params.hospital.is_some()
            || params.status.is_some();
        if !has_changes {
            // Nothing to set; an empty UPDATE is not a valid statement.
            return BloodRequest::from_entity(request).map(Some);
        }

        let mut active_model: entity::blood_request::ActiveModel = request.into();
        if let Some(patient_name) = params.patient_name {
            active_model.patient_name = ActiveValue::Set(patient_name);
        }
        if let Some(blood_type) = params.blood_type {
            active_model.blood_type = ActiveValue::Set(blood_type);
        }
        if let Some(units_needed) = params.units_needed {
            active_model.units_needed = ActiveValue::Set(units_needed);
        }
        if let Some(priority) = params.priority {
            active_model.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(hospital) = params.hospital {
            active_model.hospital = ActiveValue::Set(hospital);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }

        let entity = active_model.update(self.db).await?;

        BloodRequest::from_entity(entity).map(Some)
    }

    /// Deletes a blood request.
    ///
    /// Deletes the request with the specified ID. The delete is not checked
    /// for a match, so a nonexistent ID is indistinguishable from a successful
    /// delete.
    ///
    /// # Arguments
    /// - `id` - ID of the request to delete
    ///
    /// # Returns
    /// - `Ok(())` - Request deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::BloodRequest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
