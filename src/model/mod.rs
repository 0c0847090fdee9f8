//! Wire-level data transfer objects.
//!
//! These types define the JSON contract of the HTTP API. Field names are camelCase on
//! the wire. Server code converts domain models into these DTOs at the controller
//! boundary and never persists them directly.

pub mod api;
pub mod game;
pub mod mission;
pub mod scenario;
pub mod status;
