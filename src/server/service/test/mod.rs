use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::game::{Character, CreateGameParam, Participant},
};


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
