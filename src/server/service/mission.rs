use sea_orm::DatabaseConnection;

use crate::server::{data::mission::MissionRepository, error::AppError, model::mission::Mission};

pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every mission ordered by date
    pub async fn get_all(&self) -> Result<Vec<Mission>, AppError> {
        let repo = MissionRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific mission by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Mission>, AppError> {
        let repo = MissionRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }
}
