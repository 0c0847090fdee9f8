//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint and the DTO schemas they exchange. The
//! generated document is served next to Swagger UI by the router.

use utoipa::OpenApi;

use crate::model::{
    api::ErrorDto,
    game::{
        AddMissionDto, AddUserDto, CharacterDto, CreateGameDto, CreatedGameDto, GameDto, UserDto,
    },
    mission::MissionDto,
    scenario::{FeedbackDto, GeneratedScenarioDto, ScenarioDto},
    status::StatusDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Game master API",
        description = "Games, missions, scenarios and character artwork for game masters and their players."
    ),
    paths(
        crate::server::controller::mission::get_missions,
        crate::server::controller::mission::get_mission_by_id,
        crate::server::controller::game::create_game,
        crate::server::controller::game::get_games,
        crate::server::controller::game::get_game_by_id,
        crate::server::controller::game::add_user,
        crate::server::controller::game::add_mission,
        crate::server::controller::game::get_games_by_user,
        crate::server::controller::character::get_character_images,
        crate::server::controller::scenario::get_scenarios,
        crate::server::controller::scenario::get_scenario_by_id,
        crate::server::controller::scenario::generate_scenario,
        crate::server::controller::scenario::apply_feedback,
    ),
    components(schemas(
        ErrorDto,
        StatusDto,
        MissionDto,
        ScenarioDto,
        FeedbackDto,
        GeneratedScenarioDto,
        CharacterDto,
        UserDto,
        GameDto,
        CreateGameDto,
        CreatedGameDto,
        AddUserDto,
        AddMissionDto,
    )),
    tags(
        (name = "mission", description = "Mission locations and dates"),
        (name = "game", description = "Game sessions and their players"),
        (name = "scenario", description = "Scenarios, including headline-generated ones"),
        (name = "character", description = "Character artwork")
    )
)]
pub struct ApiDoc;
