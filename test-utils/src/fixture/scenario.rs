//! Scenario fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::scenario;

/// Default test scenario title.
pub const DEFAULT_TITLE: &str = "Découvrez la révolution horlogère";

/// Creates a scenario entity model with default values.
///
/// # Default Values
/// - id: `"sce-fixture"`
/// - title: `"Découvrez la révolution horlogère"`
/// - description: `Some("Une montre qui change tout")`
/// - source: `"https://example.com/montre"`
/// - published_date: `2024-03-12T08:30:00Z`
/// - mission_id: `None`
pub fn entity() -> scenario::Model {
    scenario::Model {
        id: "sce-fixture".to_string(),
        title: DEFAULT_TITLE.to_string(),
        description: Some("Une montre qui change tout".to_string()),
        source: "https://example.com/montre".to_string(),
        published_date: Utc.with_ymd_and_hms(2024, 3, 12, 8, 30, 0).unwrap(),
        mission_id: None,
    }
}
