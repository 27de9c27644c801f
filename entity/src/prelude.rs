pub use super::blood_request::Entity as BloodRequest;
pub use super::blood_unit::Entity as BloodUnit;
pub use super::donor::Entity as Donor;
