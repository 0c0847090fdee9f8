use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{mission::MissionDto, status::StatusDto};

/// A user's in-game persona.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    /// Alias the character plays under.
    pub cover_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Participant of a game.
///
/// `id` defaults to an empty string when absent from a request body so the service
/// layer can reject it as missing input.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub character: Option<CharacterDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: String,
    pub title: Option<String>,
    pub status: StatusDto,
    pub users: Vec<UserDto>,
    pub missions: Vec<MissionDto>,
    pub gm_id: String,
    pub gm: UserDto,
}

/// Request body for creating a game; `user` becomes the game master.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateGameDto {
    #[serde(default)]
    pub user: Option<UserDto>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGameDto {
    pub game_id: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AddUserDto {
    #[serde(default)]
    pub user: Option<UserDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddMissionDto {
    #[serde(default)]
    pub mission_id: Option<String>,
}
