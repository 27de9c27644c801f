//! Blood unit factory for creating test inventory entities.
//!
//! This module provides factory methods for creating blood unit entities with
//! sensible defaults. The expiry date defaults to 35 days after the collection
//! date, matching the service-side computation.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blood units with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::blood_unit::BloodUnitFactory;
///
/// let unit = BloodUnitFactory::new(&db, donor.id)
///     .blood_type("AB-")
///     .status("Used")
///     .build()
///     .await?;
/// ```
pub struct BloodUnitFactory<'a> {
    db: &'a DatabaseConnection,
    blood_type: String,
    donor_id: i32,
    collection_date: DateTime<Utc>,
    expiry_date: Option<DateTime<Utc>>,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> BloodUnitFactory<'a> {
    /// Creates a new BloodUnitFactory with default values.
    ///
    /// Defaults:
    /// - blood_type: `"O+"`
    /// - collection_date: now
    /// - expiry_date: collection_date + 35 days (unless overridden)
    /// - status: `"Available"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `donor_id` - Donor ID the unit references (need not exist)
    ///
    /// # Returns
    /// - `BloodUnitFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, donor_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            blood_type: "O+".to_string(),
            donor_id,
            collection_date: now,
            expiry_date: None,
            status: "Available".to_string(),
            created_at: now,
        }
    }

    /// Sets the blood type for the unit.
    pub fn blood_type(mut self, blood_type: impl Into<String>) -> Self {
        self.blood_type = blood_type.into();
        self
    }

    /// Sets the collection date for the unit.
    pub fn collection_date(mut self, collection_date: DateTime<Utc>) -> Self {
        self.collection_date = collection_date;
        self
    }

    /// Sets the expiry date for the unit, overriding the 35-day default.
    pub fn expiry_date(mut self, expiry_date: DateTime<Utc>) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    /// Sets the status string for the unit.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the creation timestamp for the unit.
    ///
    /// Useful for ordering tests that need distinct creation times.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the blood unit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::blood_unit::Model)` - Created blood unit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::blood_unit::Model, DbErr> {
        let expiry_date = self
            .expiry_date
            .unwrap_or(self.collection_date + Duration::days(35));

        entity::blood_unit::ActiveModel {
            blood_type: ActiveValue::Set(self.blood_type),
            donor_id: ActiveValue::Set(self.donor_id),
            collection_date: ActiveValue::Set(self.collection_date),
            expiry_date: ActiveValue::Set(expiry_date),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blood unit with default values for the given donor ID.
///
/// Shorthand for `BloodUnitFactory::new(db, donor_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `donor_id` - Donor ID the unit references (need not exist)
///
/// # Returns
/// - `Ok(entity::blood_unit::Model)` - Created blood unit entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_blood_unit(
    db: &DatabaseConnection,
    donor_id: i32,
) -> Result<entity::blood_unit::Model, DbErr> {
    BloodUnitFactory::new(db, donor_id).build().await
}
