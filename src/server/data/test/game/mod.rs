use crate::server::{
    data::game::GameRepository,
    model::{
        game::{Character, Participant},
        mission::Mission,
    },
};
use chrono::Utc;
use entity::sea_orm_active_enums::Status;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_mission;
mod add_user;
mod create;
mod find_by_id;
mod get_all;
mod get_by_user;

fn participant(id: &str) -> Participant {
    Participant {
        id: id.to_string(),
        character: Some(Character {
            id: format!("char-{}", id),
            user_id: id.to_string(),
            image_url: "http://localhost/images/characters/agent.png".to_string(),
            cover_name: format!("Agent {}", id),
            description: "Infiltration".to_string(),
            created_at: Utc::now(),
            deleted_at: None,
        }),
    }
}
