//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Headline source used to generate scenarios
//! - Location of the character artwork directory

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::news::NewsSource;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the news
/// source sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Headline source queried by scenario generation.
    pub news_source: Arc<dyn NewsSource>,

    /// Headline category requested when generating scenarios.
    pub news_category: String,

    /// Directory scanned for character images.
    pub character_images_dir: PathBuf,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `news_source` - Headline source for scenario generation
    /// - `news_category` - Headline category filter
    /// - `character_images_dir` - Directory holding character artwork
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        news_source: Arc<dyn NewsSource>,
        news_category: String,
        character_images_dir: PathBuf,
    ) -> Self {
        Self {
            db,
            news_source,
            news_category,
            character_images_dir,
        }
    }
}
