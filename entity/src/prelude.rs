pub use super::game::Entity as Game;
pub use super::game_mission::Entity as GameMission;
pub use super::game_user::Entity as GameUser;
pub use super::mission::Entity as Mission;
pub use super::scenario::Entity as Scenario;
