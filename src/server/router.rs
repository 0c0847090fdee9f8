use std::path::Path;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        character::get_character_images,
        game::{add_mission, add_user, create_game, get_game_by_id, get_games, get_games_by_user},
        mission::{get_mission_by_id, get_missions},
        scenario::{apply_feedback, generate_scenario, get_scenario_by_id, get_scenarios},
    },
    doc::ApiDoc,
    state::AppState,
};

/// JSON API routes.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/missions", get(get_missions))
        .route("/api/missions/{id}", get(get_mission_by_id))
        .route("/api/game", get(get_games))
        .route("/api/game/create", post(create_game))
        .route("/api/game/{id}", get(get_game_by_id))
        .route("/api/game/{id}/addUser", put(add_user))
        .route("/api/game/{id}/addMission", put(add_mission))
        .route("/api/game/user/{id}", get(get_games_by_user))
        .route("/api/character-images", get(get_character_images))
        .route("/api/scenarios", get(get_scenarios))
        .route("/api/scenarios/generate-scenario", post(generate_scenario))
        .route(
            "/api/scenarios/{id}",
            get(get_scenario_by_id).put(apply_feedback),
        )
}

/// Full application router: API routes, Swagger UI and static files from `public_dir`.
pub fn router(state: AppState, public_dir: &Path) -> Router {
    api_router()
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
