use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org";
const DEFAULT_NEWS_COUNTRY: &str = "fr";
const DEFAULT_NEWS_CATEGORY: &str = "technology";

/// Directory of character artwork, relative to the public directory.
const CHARACTER_IMAGES_DIR: &str = "images/characters";

pub struct Config {
    pub database_url: String,
    /// Drop and recreate the schema on start instead of applying pending migrations.
    pub database_reset: bool,

    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,

    pub news_api_url: String,
    pub news_api_key: Option<String>,
    pub news_country: String,
    pub news_category: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let database_reset = match var("DATABASE_RESET") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidEnvVar {
                name: "DATABASE_RESET".to_string(),
                value,
            })?,
            None => false,
        };

        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            database_reset,
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            public_dir: var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            news_api_url: var("NEWS_API_URL").unwrap_or_else(|| DEFAULT_NEWS_API_URL.to_string()),
            news_api_key: var("NEWS_API_KEY"),
            news_country: var("NEWS_COUNTRY").unwrap_or_else(|| DEFAULT_NEWS_COUNTRY.to_string()),
            news_category: var("NEWS_CATEGORY")
                .unwrap_or_else(|| DEFAULT_NEWS_CATEGORY.to_string()),
        })
    }

    pub fn character_images_dir(&self) -> PathBuf {
        self.public_dir.join(CHARACTER_IMAGES_DIR)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
