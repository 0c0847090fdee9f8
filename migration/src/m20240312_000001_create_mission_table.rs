use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(string(Mission::Id).primary_key())
                    .col(string(Mission::Country))
                    .col(string(Mission::Place))
                    .col(timestamp_with_time_zone(Mission::Date).default(Expr::current_timestamp()))
                    .col(string(Mission::Status).default("Waiting"))
                    .col(text_null(Mission::Scenario))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mission {
    Table,
    Id,
    Country,
    Place,
    Date,
    Status,
    Scenario,
}
