//! Donor entity for registered blood donors.

use sea_orm::entity::prelude::*;

/// Donor database model.
///
/// `last_donation` stays null until the first inventory unit referencing this
/// donor is recorded.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "donor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub blood_type: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub last_donation: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
