//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! together with the records they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a blood unit together with the donor it references.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific fields.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((donor, unit))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_unit_with_donor(
    db: &DatabaseConnection,
) -> Result<(entity::donor::Model, entity::blood_unit::Model), DbErr> {
    let donor = crate::factory::donor::create_donor(db).await?;
    let unit = crate::factory::blood_unit::create_blood_unit(db, donor.id).await?;

    Ok((donor, unit))
}
