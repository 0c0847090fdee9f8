//! Game data repository for database operations.
//!
//! Games are stored across three tables: `game` holds the header and the game master,
//! `game_user` holds the roster and `game_mission` holds attached mission snapshots. The
//! repository assembles them back into the `Game` domain model. Roster rows use a
//! composite `(game_id, user_id)` key so a user can only ever appear once per game, even
//! under concurrent joins.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        game::{Game, Participant},
        mission::Mission,
    },
    util::id::{prefixed_id, GAME_PREFIX},
};

/// Repository providing database operations for games and their rosters.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GameRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new game owned by `gm` with an empty roster and no missions.
    ///
    /// # Arguments
    /// - `gm` - Game master, with an optional character snapshot
    /// - `title` - Optional display title
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game in `Waiting` status
    /// - `Err(DbErr)` - Database error during insert or snapshot serialization
    pub async fn create(&self, gm: &Participant, title: Option<String>) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            id: ActiveValue::Set(prefixed_id(GAME_PREFIX)),
            title: ActiveValue::Set(title),
            status: ActiveValue::Set(Default::default()),
            gm_id: ActiveValue::Set(gm.id.clone()),
            gm_character: ActiveValue::Set(gm.character_snapshot()?),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Game::from_entity(entity, Vec::new(), Vec::new())
    }

    /// Finds a game by ID along with its roster and missions.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game with that ID
    /// - `Err(DbErr)` - Database error during query or a corrupt snapshot
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Game>, DbErr> {
        let Some(entity) = entity::prelude::Game::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.assemble(vec![entity]).await?.pop())
    }

    /// Retrieves every game ordered by creation time.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::CreatedAt)
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(entities).await
    }

    /// Retrieves the games a user masters or has joined.
    ///
    /// # Arguments
    /// - `user_id` - User to look up
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Games where the user is GM or on the roster, ordered by creation time
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Game>, DbErr> {
        let joined: Vec<String> = entity::prelude::GameUser::find()
            .filter(entity::game_user::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.game_id)
            .collect();

        let entities = entity::prelude::Game::find()
            .filter(
                Condition::any()
                    .add(entity::game::Column::GmId.eq(user_id))
                    .add(entity::game::Column::Id.is_in(joined)),
            )
            .order_by_asc(entity::game::Column::CreatedAt)
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(entities).await
    }

    /// Appends a user to a game's roster.
    ///
    /// The insert is a single conditional statement so two concurrent joins of the same
    /// user cannot both succeed.
    ///
    /// # Arguments
    /// - `game_id` - Game to join
    /// - `user` - Joining user and their character snapshot
    ///
    /// # Returns
    /// - `Ok(true)` - User appended to the roster
    /// - `Ok(false)` - User was already on the roster, nothing changed
    /// - `Err(DbErr)` - Database error during insert (including an unknown game)
    pub async fn add_user(&self, game_id: &str, user: &Participant) -> Result<bool, DbErr> {
        let row = entity::game_user::ActiveModel {
            game_id: ActiveValue::Set(game_id.to_string()),
            user_id: ActiveValue::Set(user.id.clone()),
            character: ActiveValue::Set(user.character_snapshot()?),
            joined_at: ActiveValue::Set(Utc::now()),
        };

        let inserted = entity::prelude::GameUser::insert(row)
            .on_conflict(
                OnConflict::columns([
                    entity::game_user::Column::GameId,
                    entity::game_user::Column::UserId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    /// Attaches a snapshot of a mission to a game.
    ///
    /// # Returns
    /// - `Ok(true)` - Mission attached
    /// - `Ok(false)` - Mission was already attached, nothing changed
    /// - `Err(DbErr)` - Database error during insert or snapshot serialization
    pub async fn add_mission(&self, game_id: &str, mission: &Mission) -> Result<bool, DbErr> {
        let snapshot = serde_json::to_string(mission).map_err(|e| DbErr::Json(e.to_string()))?;

        let row = entity::game_mission::ActiveModel {
            game_id: ActiveValue::Set(game_id.to_string()),
            mission_id: ActiveValue::Set(mission.id.clone()),
            mission: ActiveValue::Set(snapshot),
            added_at: ActiveValue::Set(Utc::now()),
        };

        let inserted = entity::prelude::GameMission::insert(row)
            .on_conflict(
                OnConflict::columns([
                    entity::game_mission::Column::GameId,
                    entity::game_mission::Column::MissionId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    /// Loads rosters and missions for a batch of game rows and builds domain models,
    /// preserving the order of `entities`.
    async fn assemble(&self, entities: Vec<entity::game::Model>) -> Result<Vec<Game>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = entities.iter().map(|game| game.id.clone()).collect();

        let mut rosters: HashMap<String, Vec<entity::game_user::Model>> = HashMap::new();
        for row in entity::prelude::GameUser::find()
            .filter(entity::game_user::Column::GameId.is_in(ids.clone()))
            .order_by_asc(entity::game_user::Column::JoinedAt)
            .order_by_asc(entity::game_user::Column::UserId)
            .all(self.db)
            .await?
        {
            rosters.entry(row.game_id.clone()).or_default().push(row);
        }

        let mut missions: HashMap<String, Vec<entity::game_mission::Model>> = HashMap::new();
        for row in entity::prelude::GameMission::find()
            .filter(entity::game_mission::Column::GameId.is_in(ids))
            .order_by_asc(entity::game_mission::Column::AddedAt)
            .order_by_asc(entity::game_mission::Column::MissionId)
            .all(self.db)
            .await?
        {
            missions.entry(row.game_id.clone()).or_default().push(row);
        }

        entities
            .into_iter()
            .map(|game| {
                let users = rosters.remove(&game.id).unwrap_or_default();
                let attached = missions.remove(&game.id).unwrap_or_default();
                Game::from_entity(game, users, attached)
            })
            .collect()
    }
}
