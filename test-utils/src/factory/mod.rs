//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let mission = factory::create_mission(&db).await?;
//! let game = factory::create_game(&db, "user-gm").await?;
//! factory::add_game_user(&db, &game.id, "user-1").await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let mission = factory::mission::MissionFactory::new(&db)
//!     .country("Italy")
//!     .place("Colosseum")
//!     .build()
//!     .await?;
//! ```

pub mod game;
pub mod helpers;
pub mod mission;
pub mod scenario;

pub use game::{add_game_user, create_game};
pub use mission::create_mission;
pub use scenario::create_scenario;
