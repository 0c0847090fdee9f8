use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, mission::MissionRepository},
    error::AppError,
    model::game::{CreateGameParam, Game, Participant},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new game owned by the requesting user.
    ///
    /// # Returns
    /// - `Ok(Game)` - Created game in `Waiting` status with no users or missions
    /// - `Err(AppError::InvalidInput)` - No game master was supplied
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, AppError> {
        let gm = param
            .gm
            .filter(Participant::has_id)
            .ok_or_else(|| AppError::InvalidInput("Empty input.".to_string()))?;

        let repo = GameRepository::new(self.db);
        let game = repo.create(&gm, param.title).await?;

        tracing::info!("Game {} created by {}", game.id, gm.id);

        Ok(game)
    }

    /// Gets a specific game with its roster and missions
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Gets every game
    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets the games a user masters or has joined
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Adds a user to a game's roster.
    ///
    /// The user must carry both an ID and a character. A user already on the roster is
    /// rejected, including when a concurrent request registers the same user between
    /// the check and the insert.
    ///
    /// # Arguments
    /// - `game_id` - Game to join
    /// - `user` - Joining user, if one was supplied
    ///
    /// # Returns
    /// - `Ok(Game)` - Game with the user appended to the roster
    /// - `Err(AppError::NotFound)` - No game with that ID
    /// - `Err(AppError::InvalidInput)` - User, user ID or character missing
    /// - `Err(AppError::Conflict)` - User already registered in the game
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_user(
        &self,
        game_id: &str,
        user: Option<Participant>,
    ) -> Result<Game, AppError> {
        let repo = GameRepository::new(self.db);

        let game = repo
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found.".to_string()))?;

        let user = user
            .filter(|user| user.has_id() && user.character.is_some())
            .ok_or_else(|| AppError::InvalidInput("Empty input.".to_string()))?;

        if game.has_user(&user.id) {
            return Err(already_registered());
        }

        if !repo.add_user(&game.id, &user).await? {
            return Err(already_registered());
        }

        tracing::info!("User {} joined game {}", user.id, game.id);

        repo.find_by_id(&game.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found.".to_string()))
    }

    /// Attaches a snapshot of an existing mission to a game.
    ///
    /// # Returns
    /// - `Ok(Game)` - Game with the mission appended
    /// - `Err(AppError::InvalidInput)` - Mission ID missing or blank
    /// - `Err(AppError::NotFound)` - Unknown game or mission
    /// - `Err(AppError::Conflict)` - Mission already attached to the game
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_mission(
        &self,
        game_id: &str,
        mission_id: Option<String>,
    ) -> Result<Game, AppError> {
        let repo = GameRepository::new(self.db);

        let game = repo
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found.".to_string()))?;

        let mission_id = mission_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::InvalidInput("Empty input.".to_string()))?;

        let mission = MissionRepository::new(self.db)
            .find_by_id(&mission_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mission not found.".to_string()))?;

        if game.has_mission(&mission.id) || !repo.add_mission(&game.id, &mission).await? {
            return Err(AppError::Conflict(
                "Mission already attached to this game.".to_string(),
            ));
        }

        repo.find_by_id(&game.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found.".to_string()))
    }
}

fn already_registered() -> AppError {
    AppError::Conflict("User already registered in this game.".to_string())
}
