use crate::server::{data::scenario::ScenarioRepository, model::scenario::CreateScenarioParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
mod update_description;
