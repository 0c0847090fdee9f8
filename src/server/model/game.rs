//! Game domain models and parameters.
//!
//! A game groups a game master with an ordered roster of participants and the missions
//! attached to it. Participants and missions are snapshots copied into the game: later
//! edits elsewhere do not propagate to games that already embedded them.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Status;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::{
    model::game::{CharacterDto, CreateGameDto, GameDto, UserDto},
    server::model::mission::Mission,
};

/// A user's in-game persona.
///
/// Serializable so roster entries can persist the character as it was at join time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    pub cover_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Soft-deletion timestamp, never set by this service.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Character {
    pub fn from_dto(dto: CharacterDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            image_url: dto.image_url,
            cover_name: dto.cover_name,
            description: dto.description,
            created_at: dto.created_at,
            deleted_at: dto.deleted_at,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            user_id: self.user_id,
            image_url: self.image_url,
            cover_name: self.cover_name,
            description: self.description,
            created_at: self.created_at,
            deleted_at: self.deleted_at,
        }
    }

    /// Serializes the character into the JSON snapshot stored alongside a game.
    pub fn to_snapshot(&self) -> Result<String, DbErr> {
        serde_json::to_string(self).map_err(|e| DbErr::Json(e.to_string()))
    }

    /// Restores an optional character from its stored JSON snapshot.
    pub fn from_snapshot(snapshot: Option<String>) -> Result<Option<Self>, DbErr> {
        snapshot
            .map(|json| serde_json::from_str(&json).map_err(|e| DbErr::Json(e.to_string())))
            .transpose()
    }
}

/// Participant of a game, identified by an externally managed user ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    /// User ID; empty when the request omitted it.
    pub id: String,
    pub character: Option<Character>,
}

impl Participant {
    pub fn from_dto(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            character: dto.character.map(Character::from_dto),
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            character: self.character.map(Character::into_dto),
        }
    }

    /// Whether the participant carries an identifier.
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Serializes the participant's character, if any, for storage.
    pub fn character_snapshot(&self) -> Result<Option<String>, DbErr> {
        self.character.as_ref().map(Character::to_snapshot).transpose()
    }
}

/// Game session with its game master, roster and missions.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Prefixed identifier (`g-<uuid>`).
    pub id: String,
    pub title: Option<String>,
    pub status: Status,
    /// Participants in join order; a user ID appears at most once.
    pub users: Vec<Participant>,
    /// Missions in attach order.
    pub missions: Vec<Mission>,
    pub gm: Participant,
}

impl Game {
    /// Converts entity models to a game domain model at the repository boundary.
    ///
    /// Roster and mission rows must already be in display order.
    ///
    /// # Arguments
    /// - `game` - The game row
    /// - `users` - Roster rows belonging to the game
    /// - `missions` - Mission snapshot rows belonging to the game
    ///
    /// # Returns
    /// - `Ok(Game)` - Fully assembled domain model
    /// - `Err(DbErr::Json)` - A stored snapshot could not be decoded
    pub fn from_entity(
        game: entity::game::Model,
        users: Vec<entity::game_user::Model>,
        missions: Vec<entity::game_mission::Model>,
    ) -> Result<Self, DbErr> {
        let users = users
            .into_iter()
            .map(|row| {
                Ok(Participant {
                    id: row.user_id,
                    character: Character::from_snapshot(row.character)?,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        let missions = missions
            .into_iter()
            .map(|row| {
                serde_json::from_str::<Mission>(&row.mission)
                    .map_err(|e| DbErr::Json(e.to_string()))
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok(Self {
            id: game.id,
            title: game.title,
            status: game.status,
            users,
            missions,
            gm: Participant {
                id: game.gm_id,
                character: Character::from_snapshot(game.gm_character)?,
            },
        })
    }

    /// Converts the game domain model to a DTO for API responses.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            title: self.title,
            status: self.status.into(),
            users: self.users.into_iter().map(Participant::into_dto).collect(),
            missions: self.missions.into_iter().map(Mission::into_dto).collect(),
            gm_id: self.gm.id.clone(),
            gm: self.gm.into_dto(),
        }
    }

    /// Whether `user_id` is on the roster.
    pub fn has_user(&self, user_id: &str) -> bool {
        self.users.iter().any(|user| user.id == user_id)
    }

    /// Whether `user_id` is on the roster or runs the game.
    #[cfg(test)]
    pub fn involves(&self, user_id: &str) -> bool {
        self.gm.id == user_id || self.has_user(user_id)
    }

    /// Whether a mission with `mission_id` is attached.
    pub fn has_mission(&self, mission_id: &str) -> bool {
        self.missions.iter().any(|mission| mission.id == mission_id)
    }
}

/// Parameters for creating a game.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub title: Option<String>,
    /// Game master; `None` when the request body omitted the user.
    pub gm: Option<Participant>,
}

impl CreateGameParam {
    pub fn from_dto(dto: CreateGameDto) -> Self {
        Self {
            title: dto.title,
            gm: dto.user.map(Participant::from_dto),
        }
    }
}
