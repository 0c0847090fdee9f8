//! Conversions for the lifecycle status shared by games and missions.
//!
//! The status is persisted and rendered but nothing transitions it: every game and
//! mission stays `Waiting` unless written directly.

use entity::sea_orm_active_enums::Status;

use crate::model::status::StatusDto;

impl From<Status> for StatusDto {
    fn from(status: Status) -> Self {
        match status {
            Status::Waiting => Self::Waiting,
            Status::Playing => Self::Playing,
            Status::Completed => Self::Completed,
        }
    }
}
