use sea_orm_migration::{prelude::*, schema::*};

use super::m20240312_000001_create_mission_table::Mission;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scenario::Table)
                    .if_not_exists()
                    .col(string(Scenario::Id).primary_key())
                    .col(string(Scenario::Title))
                    .col(text_null(Scenario::Description))
                    .col(string(Scenario::Source))
                    .col(timestamp_with_time_zone(Scenario::PublishedDate))
                    .col(string_null(Scenario::MissionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scenario_mission_id")
                            .from(Scenario::Table, Scenario::MissionId)
                            .to(Mission::Table, Mission::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scenario::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Scenario {
    Table,
    Id,
    Title,
    Description,
    Source,
    PublishedDate,
    MissionId,
}
