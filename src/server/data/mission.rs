//! Mission data repository for database operations.
//!
//! Provides the `MissionRepository` for reading and seeding mission records and converts
//! entity models into domain models for use within services and controllers.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    model::mission::{CreateMissionParam, Mission},
    util::id::{prefixed_id, MISSION_PREFIX},
};

/// Repository providing database operations for missions.
pub struct MissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionRepository<'a> {
    /// Creates a new MissionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MissionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new mission with a generated `mis-` identifier and `Waiting` status.
    ///
    /// # Arguments
    /// - `param` - Mission location, date and optional scenario
    ///
    /// # Returns
    /// - `Ok(Mission)` - The created mission
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMissionParam) -> Result<Mission, DbErr> {
        let entity = entity::mission::ActiveModel {
            id: ActiveValue::Set(prefixed_id(MISSION_PREFIX)),
            country: ActiveValue::Set(param.country),
            place: ActiveValue::Set(param.place),
            date: ActiveValue::Set(param.date),
            status: ActiveValue::Set(Default::default()),
            scenario: ActiveValue::Set(param.scenario),
        }
        .insert(self.db)
        .await?;

        Ok(Mission::from_entity(entity))
    }

    /// Retrieves every mission ordered by scheduled date.
    ///
    /// # Returns
    /// - `Ok(Vec<Mission>)` - All missions (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Mission>, DbErr> {
        let entities = entity::prelude::Mission::find()
            .order_by_asc(entity::mission::Column::Date)
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Mission::from_entity).collect())
    }

    /// Finds a mission by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Mission))` - Mission found
    /// - `Ok(None)` - No mission with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Mission>, DbErr> {
        let entity = entity::prelude::Mission::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Mission::from_entity))
    }

    /// Counts stored missions.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Mission::find().count(self.db).await
    }

    /// Inserts the fixture mission when no mission exists yet.
    ///
    /// The fixture is scheduled 24 hours after the call.
    ///
    /// # Returns
    /// - `Ok(Some(Mission))` - The fixture was inserted
    /// - `Ok(None)` - Missions already exist, nothing was inserted
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn seed_fixtures(&self) -> Result<Option<Mission>, DbErr> {
        if self.count().await? > 0 {
            return Ok(None);
        }

        let mission = self
            .create(CreateMissionParam {
                country: "France".to_string(),
                place: "Eiffel Tower".to_string(),
                date: Utc::now() + chrono::Duration::hours(24),
                scenario: None,
            })
            .await?;

        Ok(Some(mission))
    }
}
