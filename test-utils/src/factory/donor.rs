//! Donor factory for creating test donor entities.
//!
//! This module provides factory methods for creating donor entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test donors with customizable fields.
///
/// Provides a builder pattern for creating donor entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::donor::DonorFactory;
///
/// let donor = DonorFactory::new(&db)
///     .name("Jordan Reyes")
///     .blood_type("O-")
///     .build()
///     .await?;
/// ```
pub struct DonorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    blood_type: String,
    phone: String,
    email: String,
    address: String,
    last_donation: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> DonorFactory<'a> {
    /// Creates a new DonorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Donor {id}"` where id is auto-incremented
    /// - blood_type: `"O+"`
    /// - phone: `"555-01{id}"`
    /// - email: `"donor{id}@example.com"`
    /// - address: `"{id} Main St"`
    /// - last_donation: `None`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DonorFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Donor {}", id),
            blood_type: "O+".to_string(),
            phone: format!("555-01{}", id),
            email: format!("donor{}@example.com", id),
            address: format!("{} Main St", id),
            last_donation: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the name for the donor.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the blood type for the donor.
    pub fn blood_type(mut self, blood_type: impl Into<String>) -> Self {
        self.blood_type = blood_type.into();
        self
    }

    /// Sets the last donation timestamp for the donor.
    pub fn last_donation(mut self, last_donation: DateTime<Utc>) -> Self {
        self.last_donation = Some(last_donation);
        self
    }

    /// Sets the creation timestamp for the donor.
    ///
    /// Useful for ordering tests that need distinct creation times.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the donor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::donor::Model)` - Created donor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::donor::Model, DbErr> {
        entity::donor::ActiveModel {
            name: ActiveValue::Set(self.name),
            blood_type: ActiveValue::Set(self.blood_type),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            address: ActiveValue::Set(self.address),
            last_donation: ActiveValue::Set(self.last_donation),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a donor with default values.
///
/// Shorthand for `DonorFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::donor::Model)` - Created donor entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_donor(db: &DatabaseConnection) -> Result<entity::donor::Model, DbErr> {
    DonorFactory::new(db).build().await
}
