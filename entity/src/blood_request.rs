//! Blood request entity for hospital requests.

use sea_orm::entity::prelude::*;

/// Blood request database model.
///
/// `priority` and `status` hold the string forms of `RequestPriority` and
/// `RequestStatus`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blood_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub patient_name: String,
    pub blood_type: String,
    pub units_needed: i32,
    pub priority: String,
    pub hospital: String,
    pub status: String,
    pub request_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
