//! Mission fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::{mission, sea_orm_active_enums::Status};

/// Default test mission ID.
pub const DEFAULT_ID: &str = "mis-fixture";

/// Default test mission country.
pub const DEFAULT_COUNTRY: &str = "France";

/// Default test mission place.
pub const DEFAULT_PLACE: &str = "Eiffel Tower";

/// Creates a mission entity model with default values.
///
/// # Default Values
/// - id: `"mis-fixture"`
/// - country: `"France"`
/// - place: `"Eiffel Tower"`
/// - date: `2024-06-01T12:00:00Z`
/// - status: `Waiting`
/// - scenario: `None`
pub fn entity() -> mission::Model {
    mission::Model {
        id: DEFAULT_ID.to_string(),
        country: DEFAULT_COUNTRY.to_string(),
        place: DEFAULT_PLACE.to_string(),
        date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        status: Status::Waiting,
        scenario: None,
    }
}
