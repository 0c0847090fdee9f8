use sea_orm_migration::{prelude::*, schema::*};

use super::m20240312_000003_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameUser::Table)
                    .if_not_exists()
                    .col(string(GameUser::GameId))
                    .col(string(GameUser::UserId))
                    .col(text_null(GameUser::Character))
                    .col(
                        timestamp_with_time_zone(GameUser::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GameUser::GameId)
                            .col(GameUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_user_game_id")
                            .from(GameUser::Table, GameUser::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_user_user_id")
                    .table(GameUser::Table)
                    .col(GameUser::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameUser {
    Table,
    GameId,
    UserId,
    Character,
    JoinedAt,
}
