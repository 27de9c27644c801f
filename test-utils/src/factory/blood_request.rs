//! Blood request factory for creating test request entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blood requests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::blood_request::BloodRequestFactory;
///
/// let request = BloodRequestFactory::new(&db)
///     .priority("Critical")
///     .units_needed(4)
///     .build()
///     .await?;
/// ```
pub struct BloodRequestFactory<'a> {
    db: &'a DatabaseConnection,
    patient_name: String,
    blood_type: String,
    units_needed: i32,
    priority: String,
    hospital: String,
    status: String,
    request_date: DateTime<Utc>,
}

impl<'a> BloodRequestFactory<'a> {
    /// Creates a new BloodRequestFactory with default values.
    ///
    /// Defaults:
    /// - patient_name: `"Patient {id}"` where id is auto-incremented
    /// - blood_type: `"A+"`
    /// - units_needed: `2`
    /// - priority: `"Medium"`
    /// - hospital: `"General Hospital"`
    /// - status: `"Pending"`
    /// - request_date: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BloodRequestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            patient_name: format!("Patient {}", id),
            blood_type: "A+".to_string(),
            units_needed: 2,
            priority: "Medium".to_string(),
            hospital: "General Hospital".to_string(),
            status: "Pending".to_string(),
            request_date: Utc::now(),
        }
    }

    /// Sets the patient name for the request.
    pub fn patient_name(mut self, patient_name: impl Into<String>) -> Self {
        self.patient_name = patient_name.into();
        self
    }

    /// Sets the blood type for the request.
    pub fn blood_type(mut self, blood_type: impl Into<String>) -> Self {
        self.blood_type = blood_type.into();
        self
    }

    /// Sets the number of units needed.
    pub fn units_needed(mut self, units_needed: i32) -> Self {
        self.units_needed = units_needed;
        self
    }

    /// Sets the priority string for the request.
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Sets the status string for the request.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the request timestamp.
    ///
    /// Useful for ordering tests that need distinct request times.
    pub fn request_date(mut self, request_date: DateTime<Utc>) -> Self {
        self.request_date = request_date;
        self
    }

    /// Builds and inserts the blood request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::blood_request::Model)` - Created blood request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::blood_request::Model, DbErr> {
        entity::blood_request::ActiveModel {
            patient_name: ActiveValue::Set(self.patient_name),
            blood_type: ActiveValue::Set(self.blood_type),
            units_needed: ActiveValue::Set(self.units_needed),
            priority: ActiveValue::Set(self.priority),
            hospital: ActiveValue::Set(self.hospital),
            status: ActiveValue::Set(self.status),
            request_date: ActiveValue::Set(self.request_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blood request with default values.
///
/// Shorthand for `BloodRequestFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::blood_request::Model)` - Created blood request entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_blood_request(
    db: &DatabaseConnection,
) -> Result<entity::blood_request::Model, DbErr> {
    BloodRequestFactory::new(db).build().await
}
