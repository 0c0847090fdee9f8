pub use sea_orm_migration::prelude::*;

mod m20240312_000001_create_mission_table;
mod m20240312_000002_create_scenario_table;
mod m20240312_000003_create_game_table;
mod m20240312_000004_create_game_user_table;
mod m20240312_000005_create_game_mission_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240312_000001_create_mission_table::Migration),
            Box::new(m20240312_000002_create_scenario_table::Migration),
            Box::new(m20240312_000003_create_game_table::Migration),
            Box::new(m20240312_000004_create_game_user_table::Migration),
            Box::new(m20240312_000005_create_game_mission_table::Migration),
        ]
    }
}
