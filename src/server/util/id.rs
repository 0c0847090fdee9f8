use uuid::Uuid;

/// Prefix of mission identifiers.
pub const MISSION_PREFIX: &str = "mis";
/// Prefix of scenario identifiers.
pub const SCENARIO_PREFIX: &str = "sce";
/// Prefix of game identifiers.
pub const GAME_PREFIX: &str = "g";

/// Generates a record identifier of the form `{prefix}-{uuid v4}`.
///
/// # Arguments
/// - `prefix` - Short tag naming the record kind
///
/// # Returns
/// - `String` - New unique identifier
pub fn prefixed_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}
