use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state shared by games and missions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[default]
    #[sea_orm(string_value = "Waiting")]
    Waiting,
    #[sea_orm(string_value = "Playing")]
    Playing,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

