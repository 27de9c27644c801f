use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donor::Table)
                    .if_not_exists()
                    .col(pk_auto(Donor::Id))
                    .col(string(Donor::Name))
                    .col(string(Donor::BloodType))
                    .col(string(Donor::Phone))
                    .col(string(Donor::Email))
                    .col(string(Donor::Address))
                    .col(timestamp_null(Donor::LastDonation))
                    .col(
                        timestamp(Donor::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Donor {
    Table,
    Id,
    Name,
    BloodType,
    Phone,
    Email,
    Address,
    LastDonation,
    CreatedAt,
}
