//! Mission factory for creating test mission entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::Status;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test missions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mission::MissionFactory;
///
/// let mission = MissionFactory::new(&db)
///     .country("Italy")
///     .place("Colosseum")
///     .build()
///     .await?;
/// ```
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    country: String,
    place: String,
    date: DateTime<Utc>,
    scenario: Option<String>,
}

impl<'a> MissionFactory<'a> {
    /// Creates a new MissionFactory with default values.
    ///
    /// Defaults:
    /// - id: `"mis-test-{n}"` where n is auto-incremented
    /// - country: `"France"`
    /// - place: `"Place {n}"`
    /// - date: 1 day from now
    /// - scenario: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("mis-test-{}", id),
            country: "France".to_string(),
            place: format!("Place {}", id),
            date: Utc::now() + Duration::days(1),
            scenario: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn scenario(mut self, scenario: Option<String>) -> Self {
        self.scenario = scenario;
        self
    }

    /// Inserts the mission into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mission::Model)` - The created mission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        entity::mission::ActiveModel {
            id: ActiveValue::Set(self.id),
            country: ActiveValue::Set(self.country),
            place: ActiveValue::Set(self.place),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(Status::Waiting),
            scenario: ActiveValue::Set(self.scenario),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mission with default values.
pub async fn create_mission(db: &DatabaseConnection) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db).build().await
}
