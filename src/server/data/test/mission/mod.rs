use crate::server::{data::mission::MissionRepository, model::mission::CreateMissionParam};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::Status;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
mod seed_fixtures;
