//! Shared wire types (DTOs) for the HTTP API.
//!
//! All DTOs serialize with camelCase field names and derive `ToSchema` for the
//! generated OpenAPI document. Successful mutations are wrapped in the uniform
//! `{"success": true, ...}` envelope; failures use `ErrorDto`.

pub mod api;
pub mod donor;
pub mod inventory;
pub mod request;
