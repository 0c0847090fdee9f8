use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240312_000001_create_mission_table::Mission, m20240312_000003_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameMission::Table)
                    .if_not_exists()
                    .col(string(GameMission::GameId))
                    .col(string(GameMission::MissionId))
                    .col(text(GameMission::Mission))
                    .col(
                        timestamp_with_time_zone(GameMission::AddedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GameMission::GameId)
                            .col(GameMission::MissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_mission_game_id")
                            .from(GameMission::Table, GameMission::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_mission_mission_id")
                            .from(GameMission::Table, GameMission::MissionId)
                            .to(Mission::Table, Mission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameMission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameMission {
    Table,
    GameId,
    MissionId,
    Mission,
    AddedAt,
}
