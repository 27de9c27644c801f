use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(BloodRequest::Id))
                    .col(string(BloodRequest::PatientName))
                    .col(string(BloodRequest::BloodType))
                    .col(integer(BloodRequest::UnitsNeeded))
                    .col(string(BloodRequest::Priority))
                    .col(string(BloodRequest::Hospital))
                    .col(string(BloodRequest::Status).default("Pending"))
                    .col(
                        timestamp(BloodRequest::RequestDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BloodRequest {
    Table,
    Id,
    PatientName,
    BloodType,
    UnitsNeeded,
    Priority,
    Hospital,
    Status,
    RequestDate,
}
