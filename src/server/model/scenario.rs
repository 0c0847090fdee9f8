//! Scenario domain models and parameters.
//!
//! Scenarios are narrative texts, authored directly or derived from a news headline,
//! optionally linked to a mission.

use chrono::{DateTime, Utc};

use crate::{model::scenario::ScenarioDto, server::news::Article};

/// Prefix placed before the feedback text when rewriting a description.
const FEEDBACK_PREFIX: &str = "Contexte :";

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Prefixed identifier (`sce-<uuid>`).
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// URL of the source article.
    pub source: String,
    pub published_date: DateTime<Utc>,
    pub mission_id: Option<String>,
}

impl Scenario {
    /// Converts an entity model to a scenario domain model at the repository boundary.
    pub fn from_entity(entity: entity::scenario::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            source: entity.source,
            published_date: entity.published_date,
            mission_id: entity.mission_id,
        }
    }

    /// Converts the scenario domain model to a DTO for API responses.
    pub fn into_dto(self) -> ScenarioDto {
        ScenarioDto {
            id: self.id,
            title: self.title,
            description: self.description,
            source: self.source,
            published_date: self.published_date,
            mission_id: self.mission_id,
        }
    }

    /// Builds the description produced by applying `feedback` to this scenario.
    ///
    /// Always derived from the title, so the previous description is discarded and
    /// applying the same feedback twice yields the same text.
    pub fn feedback_description(&self, feedback: &str) -> String {
        format!("{} {} {}", FEEDBACK_PREFIX, feedback, self.title)
    }
}

/// Parameters for inserting a new scenario.
#[derive(Debug, Clone)]
pub struct CreateScenarioParam {
    pub title: String,
    pub description: Option<String>,
    pub source: String,
    pub published_date: DateTime<Utc>,
    pub mission_id: Option<String>,
}

impl CreateScenarioParam {
    /// Maps a headline 1:1 onto a new, unlinked scenario.
    pub fn from_article(article: Article) -> Self {
        Self {
            title: article.title,
            description: article.description,
            source: article.url,
            published_date: article.published_at,
            mission_id: None,
        }
    }
}
