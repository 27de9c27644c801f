pub mod prelude;

pub mod blood_request;
pub mod blood_unit;
pub mod donor;
