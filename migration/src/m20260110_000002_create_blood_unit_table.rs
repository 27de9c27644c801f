use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // donor_id is deliberately not a foreign key; units may reference
        // donors that were deleted or never existed.
        manager
            .create_table(
                Table::create()
                    .table(BloodUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(BloodUnit::Id))
                    .col(string(BloodUnit::BloodType))
                    .col(integer(BloodUnit::DonorId))
                    .col(timestamp(BloodUnit::CollectionDate))
                    .col(timestamp(BloodUnit::ExpiryDate))
                    .col(string(BloodUnit::Status).default("Available"))
                    .col(
                        timestamp(BloodUnit::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodUnit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BloodUnit {
    Table,
    Id,
    BloodType,
    DonorId,
    CollectionDate,
    ExpiryDate,
    Status,
    CreatedAt,
}
