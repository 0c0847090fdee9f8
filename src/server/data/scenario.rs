//! Scenario data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    model::scenario::{CreateScenarioParam, Scenario},
    util::id::{prefixed_id, SCENARIO_PREFIX},
};

/// Repository providing database operations for scenarios.
pub struct ScenarioRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScenarioRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new scenario with a generated `sce-` identifier.
    ///
    /// # Returns
    /// - `Ok(Scenario)` - The created scenario
    /// - `Err(DbErr)` - Database error during insert (including an unknown `mission_id`)
    pub async fn create(&self, param: CreateScenarioParam) -> Result<Scenario, DbErr> {
        let entity = entity::scenario::ActiveModel {
            id: ActiveValue::Set(prefixed_id(SCENARIO_PREFIX)),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            source: ActiveValue::Set(param.source),
            published_date: ActiveValue::Set(param.published_date),
            mission_id: ActiveValue::Set(param.mission_id),
        }
        .insert(self.db)
        .await?;

        Ok(Scenario::from_entity(entity))
    }

    /// Retrieves every scenario, most recently published first.
    pub async fn get_all(&self) -> Result<Vec<Scenario>, DbErr> {
        let entities = entity::prelude::Scenario::find()
            .order_by_desc(entity::scenario::Column::PublishedDate)
            .order_by_asc(entity::scenario::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Scenario::from_entity).collect())
    }

    /// Finds a scenario by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Scenario))` - Scenario found
    /// - `Ok(None)` - No scenario with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Scenario>, DbErr> {
        let entity = entity::prelude::Scenario::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Scenario::from_entity))
    }

    /// Overwrites the description of a scenario.
    ///
    /// # Arguments
    /// - `id` - ID of the scenario to update
    /// - `description` - New description replacing the previous one
    ///
    /// # Returns
    /// - `Ok(Scenario)` - The updated scenario
    /// - `Err(DbErr::RecordNotUpdated)` - No scenario with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_description(
        &self,
        id: &str,
        description: String,
    ) -> Result<Scenario, DbErr> {
        let entity = entity::scenario::ActiveModel {
            id: ActiveValue::Unchanged(id.to_string()),
            description: ActiveValue::Set(Some(description)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Scenario::from_entity(entity))
    }
}
