//! Scenario factory for creating test scenario entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test scenarios with customizable fields.
pub struct ScenarioFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    title: String,
    description: Option<String>,
    source: String,
    published_date: DateTime<Utc>,
    mission_id: Option<String>,
}

impl<'a> ScenarioFactory<'a> {
    /// Creates a new ScenarioFactory with default values.
    ///
    /// Defaults:
    /// - id: `"sce-test-{n}"` where n is auto-incremented
    /// - title: `"Scenario {n}"`
    /// - description: `Some("Test scenario description")`
    /// - source: `"https://example.com/articles/{n}"`
    /// - published_date: now
    /// - mission_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("sce-test-{}", id),
            title: format!("Scenario {}", id),
            description: Some("Test scenario description".to_string()),
            source: format!("https://example.com/articles/{}", id),
            published_date: Utc::now(),
            mission_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn mission_id(mut self, mission_id: Option<String>) -> Self {
        self.mission_id = mission_id;
        self
    }

    /// Inserts the scenario into the database.
    pub async fn build(self) -> Result<entity::scenario::Model, DbErr> {
        entity::scenario::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            source: ActiveValue::Set(self.source),
            published_date: ActiveValue::Set(self.published_date),
            mission_id: ActiveValue::Set(self.mission_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scenario with default values.
pub async fn create_scenario(db: &DatabaseConnection) -> Result<entity::scenario::Model, DbErr> {
    ScenarioFactory::new(db).build().await
}
