use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a game or mission.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDto {
    Waiting,
    Playing,
    Completed,
}
