//! Blood unit entity for collected inventory units.

use sea_orm::entity::prelude::*;

/// Blood unit database model.
///
/// `donor_id` is a loose reference to `donor.id` without a foreign key
/// constraint; a unit may outlive or predate its donor record.
/// `status` holds the string form of `UnitStatus`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blood_unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub blood_type: String,
    pub donor_id: i32,
    pub collection_date: DateTimeUtc,
    pub expiry_date: DateTimeUtc,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
