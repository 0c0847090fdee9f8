use sea_orm::DatabaseConnection;

use crate::server::{
    data::scenario::ScenarioRepository,
    error::AppError,
    model::scenario::{CreateScenarioParam, Scenario},
    news::NewsSource,
};

pub struct ScenarioService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScenarioService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every scenario
    pub async fn get_all(&self) -> Result<Vec<Scenario>, AppError> {
        let repo = ScenarioRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific scenario by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Scenario>, AppError> {
        let repo = ScenarioRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Creates a scenario from the first headline of `category`.
    ///
    /// The scenario is only inserted once a headline was obtained, so an empty or
    /// failing source leaves the store untouched.
    ///
    /// # Arguments
    /// - `source` - Headline source to query
    /// - `category` - Headline category filter
    ///
    /// # Returns
    /// - `Ok(Scenario)` - Newly created scenario, not linked to any mission
    /// - `Err(AppError::NewsErr)` - Source returned no article or failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn generate_from_news(
        &self,
        source: &dyn NewsSource,
        category: &str,
    ) -> Result<Scenario, AppError> {
        let article = source.fetch_headline(category).await?;

        tracing::debug!("Generating scenario from headline \"{}\"", article.title);

        let repo = ScenarioRepository::new(self.db);
        let scenario = repo.create(CreateScenarioParam::from_article(article)).await?;

        Ok(scenario)
    }

    /// Rewrites a scenario description from player feedback.
    ///
    /// The new description is derived from the feedback and the scenario title only,
    /// so the previous description is discarded.
    ///
    /// # Arguments
    /// - `id` - Scenario to update
    /// - `feedback` - Feedback text, required and non-blank
    ///
    /// # Returns
    /// - `Ok(Scenario)` - Updated scenario
    /// - `Err(AppError::NotFound)` - No scenario with that ID
    /// - `Err(AppError::InvalidInput)` - Feedback missing or blank
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn apply_feedback(
        &self,
        id: &str,
        feedback: Option<String>,
    ) -> Result<Scenario, AppError> {
        let repo = ScenarioRepository::new(self.db);

        let scenario = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Scenario not found.".to_string()))?;

        let feedback = feedback
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::InvalidInput("Feedback is required.".to_string()))?;

        let description = scenario.feedback_description(&feedback);

        Ok(repo.update_description(&scenario.id, description).await?)
    }
}
