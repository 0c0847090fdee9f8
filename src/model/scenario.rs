use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// URL of the article the scenario was derived from.
    pub source: String,
    pub published_date: DateTime<Utc>,
    pub mission_id: Option<String>,
}

/// Feedback text used to rewrite a scenario's description.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct FeedbackDto {
    #[serde(default)]
    #[schema(example = "Année 1970, Paris")]
    pub feedback: Option<String>,
}

/// Response of a successful news-based scenario generation.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GeneratedScenarioDto {
    pub message: String,
    pub scenario: ScenarioDto,
}
