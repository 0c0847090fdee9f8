use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::status::StatusDto;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MissionDto {
    pub id: String,
    pub country: String,
    pub place: String,
    pub date: DateTime<Utc>,
    pub status: StatusDto,
    pub scenario: Option<String>,
}
