use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{AddMissionDto, AddUserDto, CreateGameDto, CreatedGameDto, GameDto},
    },
    server::{
        controller::parsed_body,
        error::AppError,
        model::game::{CreateGameParam, Participant},
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Create a new game.
///
/// The requesting user becomes the game master. The game starts in `Waiting` status
/// with no players and no missions.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Game master and optional title
///
/// # Returns
/// - `200 OK` - ID of the created game
/// - `400 Bad Request` - No user supplied or body not valid JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/game/create",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 200, description = "Game created", body = CreatedGameDto),
        (status = 400, description = "Empty input", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<CreateGameDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = GameService::new(&state.db);

    let game = service.create(CreateGameParam::from_dto(payload)).await?;

    Ok(Json(CreatedGameDto { game_id: game.id }))
}

/// List all games.
#[utoipa::path(
    get,
    path = "/api/game",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let games = service.get_all().await?;

    Ok(Json(
        games
            .into_iter()
            .map(|game| game.into_dto())
            .collect::<Vec<GameDto>>(),
    ))
}

/// Get a game by ID.
///
/// # Returns
/// - `200 OK` - Game with roster and missions
/// - `404 Not Found` - No game with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/game/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let game = service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Game not found.".to_string()))?;

    Ok(Json(game.into_dto()))
}

/// Add a user to a game.
///
/// The user must have an ID and a character and must not already be registered in the
/// game.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game ID
/// - `payload` - Joining user with their character
///
/// # Returns
/// - `200 OK` - Updated game
/// - `400 Bad Request` - User, user ID or character missing or malformed
/// - `404 Not Found` - No game with that ID
/// - `409 Conflict` - User already registered in the game
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/game/{id}/addUser",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game ID")
    ),
    request_body = AddUserDto,
    responses(
        (status = 200, description = "User added to the game", body = GameDto),
        (status = 400, description = "Empty input", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 409, description = "User already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AddUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let user = parsed_body(payload)
        .and_then(|dto| dto.user)
        .map(Participant::from_dto);
    let game = service.add_user(&id, user).await?;

    Ok(Json(game.into_dto()))
}

/// Attach a mission to a game.
///
/// # Returns
/// - `200 OK` - Updated game
/// - `400 Bad Request` - Mission ID missing
/// - `404 Not Found` - Unknown game or mission
/// - `409 Conflict` - Mission already attached
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/game/{id}/addMission",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game ID")
    ),
    request_body = AddMissionDto,
    responses(
        (status = 200, description = "Mission attached to the game", body = GameDto),
        (status = 400, description = "Empty input", body = ErrorDto),
        (status = 404, description = "Game or mission not found", body = ErrorDto),
        (status = 409, description = "Mission already attached", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_mission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AddMissionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let mission_id = parsed_body(payload).and_then(|dto| dto.mission_id);
    let game = service.add_mission(&id, mission_id).await?;

    Ok(Json(game.into_dto()))
}

/// List the games of a user.
///
/// Returns the games the user masters or has joined.
///
/// # Returns
/// - `200 OK` - Games involving the user (empty if none)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/game/user/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let games = service.get_by_user(&user_id).await?;

    Ok(Json(
        games
            .into_iter()
            .map(|game| game.into_dto())
            .collect::<Vec<GameDto>>(),
    ))
}
