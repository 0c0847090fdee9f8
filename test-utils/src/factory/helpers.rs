//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game run by `gm_id` with the provided users already on its roster.
///
/// Users are inserted in slice order, so roster order matches the slice.
///
/// # Arguments
/// - `db` - Database connection
/// - `gm_id` - User ID of the game master
/// - `user_ids` - User IDs to place on the roster
///
/// # Returns
/// - `Ok((game, roster))` - The created game and its roster entries
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_users(
    db: &DatabaseConnection,
    gm_id: &str,
    user_ids: &[&str],
) -> Result<(entity::game::Model, Vec<entity::game_user::Model>), DbErr> {
    let game = crate::factory::game::create_game(db, gm_id).await?;

    let mut roster = Vec::with_capacity(user_ids.len());
    for user_id in user_ids {
        roster.push(crate::factory::game::add_game_user(db, &game.id, user_id).await?);
    }

    Ok((game, roster))
}
