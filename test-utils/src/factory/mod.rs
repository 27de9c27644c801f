//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle cross-entity references,
//! making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn records_unit() -> Result<(), DbErr> {
//!     let donor = factory::create_donor(&db).await?;
//!     let unit = factory::create_blood_unit(&db, donor.id).await?;
//!     // ...
//! }
//! ```

pub mod blood_request;
pub mod blood_unit;
pub mod donor;
pub mod helpers;

pub use blood_request::create_blood_request;
pub use blood_unit::create_blood_unit;
pub use donor::create_donor;
