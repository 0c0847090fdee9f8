//! Headline sources used to seed scenarios.
//!
//! Scenario generation depends only on the [`NewsSource`] capability so it can run
//! against the real News API in production and an in-process stub in tests.

pub mod newsapi;
#[cfg(test)]
pub mod stub;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::server::error::news::NewsSourceError;

/// A single news headline.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

/// Capability to fetch the current top headline of a category.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetches the first headline of `category`.
    ///
    /// # Returns
    /// - `Ok(Article)` - The first headline returned by the source
    /// - `Err(NewsSourceError::NoArticles)` - The source answered with no headlines
    /// - `Err(NewsSourceError)` - Transport, status or decoding failure
    async fn fetch_headline(&self, category: &str) -> Result<Article, NewsSourceError>;
}
