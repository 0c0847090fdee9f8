use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Status;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub country: String,
    pub place: String,
    pub date: DateTimeUtc,
    pub status: Status,
    #[sea_orm(column_type = "Text", nullable)]
    pub scenario: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scenario::Entity")]
    Scenario,
    #[sea_orm(has_many = "super::game_mission::Entity")]
    GameMission,
}

impl Related<super::scenario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scenario.def()
    }
}

impl Related<super::game_mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
