//! Game factory for creating test games and roster entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::Status;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db, "user-gm")
///     .title(Some("Operation Sunrise".to_string()))
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    title: Option<String>,
    status: Status,
    gm_id: String,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - id: `"g-test-{n}"` where n is auto-incremented
    /// - title: `None`
    /// - status: `Waiting`
    pub fn new(db: &'a DatabaseConnection, gm_id: impl Into<String>) -> Self {
        Self {
            db,
            id: format!("g-test-{}", next_id()),
            title: None,
            status: Status::Waiting,
            gm_id: gm_id.into(),
        }
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Inserts the game into the database.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            status: ActiveValue::Set(self.status),
            gm_id: ActiveValue::Set(self.gm_id),
            gm_character: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values run by `gm_id`.
pub async fn create_game(
    db: &DatabaseConnection,
    gm_id: &str,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db, gm_id).build().await
}

/// Places a user on a game's roster with a minimal character snapshot.
pub async fn add_game_user(
    db: &DatabaseConnection,
    game_id: &str,
    user_id: &str,
) -> Result<entity::game_user::Model, DbErr> {
    let character = serde_json::json!({
        "id": format!("char-{}", user_id),
        "userId": user_id,
        "imageUrl": "http://localhost:3000/images/characters/agent.png",
        "coverName": format!("Agent {}", user_id),
        "description": "Test character",
        "createdAt": Utc::now(),
        "deletedAt": null,
    });

    entity::game_user::ActiveModel {
        game_id: ActiveValue::Set(game_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        character: ActiveValue::Set(Some(character.to_string())),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
