use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        scenario::{FeedbackDto, GeneratedScenarioDto, ScenarioDto},
    },
    server::{
        controller::parsed_body, error::AppError, service::scenario::ScenarioService,
        state::AppState,
    },
};

/// Tag for grouping scenario endpoints in OpenAPI documentation
pub static SCENARIO_TAG: &str = "scenario";

/// List all scenarios.
///
/// # Returns
/// - `200 OK` - List of scenarios, most recently published first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/scenarios",
    tag = SCENARIO_TAG,
    responses(
        (status = 200, description = "Successfully retrieved scenarios", body = Vec<ScenarioDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scenarios(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ScenarioService::new(&state.db);

    let scenarios = service.get_all().await?;

    Ok(Json(
        scenarios
            .into_iter()
            .map(|scenario| scenario.into_dto())
            .collect::<Vec<ScenarioDto>>(),
    ))
}

/// Get a scenario by ID.
///
/// # Returns
/// - `200 OK` - Scenario details
/// - `404 Not Found` - No scenario with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/scenarios/{id}",
    tag = SCENARIO_TAG,
    params(
        ("id" = String, Path, description = "Scenario ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved scenario", body = ScenarioDto),
        (status = 404, description = "Scenario not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scenario_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScenarioService::new(&state.db);

    let scenario = service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Scenario not found.".to_string()))?;

    Ok(Json(scenario.into_dto()))
}

/// Generate a scenario from the latest headline.
///
/// Fetches the first headline of the configured category from the news source and
/// stores it as a new scenario that is not linked to any mission.
///
/// # Arguments
/// - `state` - Application state containing the database connection and news source
///
/// # Returns
/// - `201 Created` - Scenario generated from a headline
/// - `404 Not Found` - The news source returned no article
/// - `500 Internal Server Error` - News source unreachable or database error
#[utoipa::path(
    post,
    path = "/api/scenarios/generate-scenario",
    tag = SCENARIO_TAG,
    responses(
        (status = 201, description = "Scenario generated", body = GeneratedScenarioDto),
        (status = 404, description = "No news articles found", body = ErrorDto),
        (status = 500, description = "Error generating scenario", body = ErrorDto)
    ),
)]
pub async fn generate_scenario(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScenarioService::new(&state.db);

    let scenario = service
        .generate_from_news(state.news_source.as_ref(), &state.news_category)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(GeneratedScenarioDto {
            message: "Scenario generated successfully.".to_string(),
            scenario: scenario.into_dto(),
        }),
    ))
}

/// Rewrite a scenario description from player feedback.
///
/// Replaces the description with `"Contexte : {feedback} {title}"`. The previous
/// description is lost.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Scenario ID
/// - `payload` - Feedback text
///
/// # Returns
/// - `200 OK` - Updated scenario
/// - `400 Bad Request` - Feedback missing or blank
/// - `404 Not Found` - No scenario with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/scenarios/{id}",
    tag = SCENARIO_TAG,
    params(
        ("id" = String, Path, description = "Scenario ID")
    ),
    request_body = FeedbackDto,
    responses(
        (status = 200, description = "Scenario updated", body = ScenarioDto),
        (status = 400, description = "Feedback missing", body = ErrorDto),
        (status = 404, description = "Scenario not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<FeedbackDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScenarioService::new(&state.db);

    let feedback = parsed_body(payload).and_then(|dto| dto.feedback);
    let scenario = service.apply_feedback(&id, feedback).await?;

    Ok(Json(scenario.into_dto()))
}
