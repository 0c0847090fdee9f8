//! SeaORM entity definitions for the game master backend.

pub mod prelude;

pub mod game;
pub mod game_mission;
pub mod game_user;
pub mod mission;
pub mod scenario;
pub mod sea_orm_active_enums;
