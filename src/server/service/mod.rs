//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Preconditions**: Rejecting missing input, unknown IDs and duplicate memberships
//!   before any mutation
//! - **Orchestration**: Coordinating repository calls and the headline source
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod character;
pub mod game;
pub mod mission;
pub mod scenario;

#[cfg(test)]
mod test;
