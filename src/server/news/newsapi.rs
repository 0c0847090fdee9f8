//! Reqwest-backed adapter for the newsapi.org `top-headlines` endpoint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header::ACCEPT, Client};
use serde::Deserialize;
use url::Url;

use super::{Article, NewsSource};
use crate::server::error::news::NewsSourceError;

const TOP_HEADLINES_PATH: &str = "v2/top-headlines";

#[derive(Deserialize)]
struct TopHeadlinesDto {
    #[serde(default)]
    articles: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleDto {
    title: String,
    description: Option<String>,
    url: String,
    published_at: DateTime<Utc>,
}

impl ArticleDto {
    fn into_article(self) -> Article {
        Article {
            title: self.title,
            description: self.description,
            url: self.url,
            published_at: self.published_at,
        }
    }
}

/// News source querying newsapi.org for one country's headlines.
pub struct NewsApiSource {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    country: String,
}

impl NewsApiSource {
    /// Creates a source for the API rooted at `base_url`.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `base_url` - API root, e.g. `https://newsapi.org`
    /// - `api_key` - API key; requests fail with `MissingApiKey` when absent
    /// - `country` - Two-letter country filter applied to every request
    ///
    /// # Returns
    /// - `Ok(NewsApiSource)` - Source ready for use
    /// - `Err(url::ParseError)` - `base_url` is not a valid URL
    pub fn new(
        client: Client,
        base_url: &str,
        api_key: Option<String>,
        country: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(base_url)?.join(TOP_HEADLINES_PATH)?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            country: country.into(),
        })
    }

    fn request_url(&self, category: &str, api_key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("country", &self.country)
            .append_pair("category", category)
            .append_pair("apiKey", api_key);
        url
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    async fn fetch_headline(&self, category: &str) -> Result<Article, NewsSourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(NewsSourceError::MissingApiKey)?;

        let response = self
            .client
            .get(self.request_url(category, api_key))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(NewsSourceError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        first_article(&body)
    }
}

fn first_article(body: &[u8]) -> Result<Article, NewsSourceError> {
    let payload: TopHeadlinesDto =
        serde_json::from_slice(body).map_err(|e| NewsSourceError::Decode(e.to_string()))?;

    let first = payload
        .articles
        .into_iter()
        .next()
        .ok_or(NewsSourceError::NoArticles)?;

    serde_json::from_value::<ArticleDto>(first)
        .map(ArticleDto::into_article)
        .map_err(|e| NewsSourceError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(api_key: Option<&str>) -> NewsApiSource {
        NewsApiSource::new(
            Client::new(),
            "https://newsapi.org",
            api_key.map(str::to_string),
            "fr",
        )
        .unwrap()
    }

    #[test]
    fn builds_top_headlines_url() {
        let url = source(Some("secret")).request_url("technology", "secret");

        assert_eq!(
            url.as_str(),
            "https://newsapi.org/v2/top-headlines?country=fr&category=technology&apiKey=secret"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = NewsApiSource::new(Client::new(), "not a url", None, "fr");

        assert!(result.is_err());
    }

    #[test]
    fn takes_first_article() {
        let body = br#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": null, "name": "Le Monde"},
                    "title": "First",
                    "description": "First description",
                    "url": "https://example.com/first",
                    "publishedAt": "2024-03-12T08:30:00Z"
                },
                {
                    "title": "Second",
                    "description": null,
                    "url": "https://example.com/second",
                    "publishedAt": "2024-03-12T09:30:00Z"
                }
            ]
        }"#;

        let article = first_article(body).unwrap();

        assert_eq!(article.title, "First");
        assert_eq!(article.description.as_deref(), Some("First description"));
        assert_eq!(article.url, "https://example.com/first");
        assert_eq!(article.published_at.to_rfc3339(), "2024-03-12T08:30:00+00:00");
    }

    #[test]
    fn ignores_malformed_later_articles() {
        let body = br#"{
            "status": "ok",
            "articles": [
                {
                    "title": "First",
                    "description": null,
                    "url": "https://example.com/first",
                    "publishedAt": "2024-03-12T08:30:00Z"
                },
                {"title": null, "url": null}
            ]
        }"#;

        let article = first_article(body).unwrap();

        assert_eq!(article.title, "First");
        assert!(article.description.is_none());
    }

    #[test]
    fn reports_malformed_first_article_as_decode_error() {
        let body = br#"{"status": "ok", "articles": [{"title": null}]}"#;

        assert!(matches!(
            first_article(body),
            Err(NewsSourceError::Decode(_))
        ));
    }

    #[test]
    fn reports_empty_result_as_no_articles() {
        let body = br#"{"status": "ok", "totalResults": 0, "articles": []}"#;

        assert!(matches!(
            first_article(body),
            Err(NewsSourceError::NoArticles)
        ));
    }

    #[test]
    fn reports_malformed_payload_as_decode_error() {
        assert!(matches!(
            first_article(b"<html>"),
            Err(NewsSourceError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn fails_without_api_key() {
        let result = source(None).fetch_headline("technology").await;

        assert!(matches!(result, Err(NewsSourceError::MissingApiKey)));
    }
}
