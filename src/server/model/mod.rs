//! Domain models and operation-specific parameter types.
//!
//! Domain models sit between the persistence entities and the wire DTOs. Each
//! provides `from_entity` for conversion at the repository boundary and
//! `into_dto` for conversion at the controller boundary.

pub mod donor;
pub mod inventory;
pub mod request;
