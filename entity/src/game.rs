use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Status;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: Option<String>,
    pub status: Status,
    pub gm_id: String,
    /// JSON snapshot of the game master's character at creation time.
    #[sea_orm(column_type = "Text", nullable)]
    pub gm_character: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_user::Entity")]
    GameUser,
    #[sea_orm(has_many = "super::game_mission::Entity")]
    GameMission,
}

impl Related<super::game_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameUser.def()
    }
}

impl Related<super::game_mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
