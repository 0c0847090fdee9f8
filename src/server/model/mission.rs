//! Mission domain models and parameters.
//!
//! A mission is a location and date at which a scenario takes place. Missions are
//! seeded at startup and embedded by value into games.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Status;
use serde::{Deserialize, Serialize};

use crate::model::mission::MissionDto;

/// Mission with location, schedule and optional narrative.
///
/// Serializable so games can persist a copy of the mission as it was when attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Prefixed identifier (`mis-<uuid>`).
    pub id: String,
    pub country: String,
    /// Place within the country.
    pub place: String,
    /// Scheduled date and time of the mission.
    pub date: DateTime<Utc>,
    pub status: Status,
    /// Narrative scenario text, if any.
    pub scenario: Option<String>,
}

impl Mission {
    /// Converts an entity model to a mission domain model at the repository boundary.
    pub fn from_entity(entity: entity::mission::Model) -> Self {
        Self {
            id: entity.id,
            country: entity.country,
            place: entity.place,
            date: entity.date,
            status: entity.status,
            scenario: entity.scenario,
        }
    }

    /// Converts the mission domain model to a DTO for API responses.
    pub fn into_dto(self) -> MissionDto {
        MissionDto {
            id: self.id,
            country: self.country,
            place: self.place,
            date: self.date,
            status: self.status.into(),
            scenario: self.scenario,
        }
    }
}

/// Parameters for inserting a new mission.
#[derive(Debug, Clone)]
pub struct CreateMissionParam {
    pub country: String,
    pub place: String,
    pub date: DateTime<Utc>,
    pub scenario: Option<String>,
}
