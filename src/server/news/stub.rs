//! In-process news source for tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::{Article, NewsSource};
use crate::server::error::news::NewsSourceError;

/// News source answering from a fixed list of headlines.
pub struct StubNewsSource {
    articles: Vec<Article>,
    unavailable: bool,
}

impl StubNewsSource {
    /// Source that always reports no headlines.
    pub fn empty() -> Self {
        Self {
            articles: Vec::new(),
            unavailable: false,
        }
    }

    /// Source whose first headline is `article`.
    pub fn with_article(article: Article) -> Self {
        Self {
            articles: vec![article],
            unavailable: false,
        }
    }

    /// Source that fails as if the upstream were down.
    pub fn unavailable() -> Self {
        Self {
            articles: Vec::new(),
            unavailable: true,
        }
    }

    /// A representative headline.
    pub fn sample_article() -> Article {
        Article {
            title: "Découvrez la révolution horlogère".to_string(),
            description: Some("Une montre qui change tout".to_string()),
            url: "https://example.com/montre".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 3, 12, 8, 30, 0).unwrap(),
        }
    }
}

#[async_trait]
impl NewsSource for StubNewsSource {
    async fn fetch_headline(&self, _category: &str) -> Result<Article, NewsSourceError> {
        if self.unavailable {
            return Err(NewsSourceError::Status {
                status: 503,
                body: "Service Unavailable".to_string(),
            });
        }

        self.articles
            .first()
            .cloned()
            .ok_or(NewsSourceError::NoArticles)
    }
}
