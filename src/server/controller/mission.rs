use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, mission::MissionDto},
    server::{error::AppError, service::mission::MissionService, state::AppState},
};

/// Tag for grouping mission endpoints in OpenAPI documentation
pub static MISSION_TAG: &str = "mission";

/// List all missions.
///
/// Returns every mission ordered by scheduled date.
///
/// # Returns
/// - `200 OK` - List of missions (empty if none exist)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/missions",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved missions", body = Vec<MissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_missions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    let missions = service.get_all().await?;

    Ok(Json(
        missions
            .into_iter()
            .map(|mission| mission.into_dto())
            .collect::<Vec<MissionDto>>(),
    ))
}

/// Get a mission by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Mission ID
///
/// # Returns
/// - `200 OK` - Mission details
/// - `404 Not Found` - No mission with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved mission", body = MissionDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    let mission = service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Mission not found.".to_string()))?;

    Ok(Json(mission.into_dto()))
}
