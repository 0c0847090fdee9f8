use std::{sync::Arc, time::Duration};

use crate::server::{
    config::Config,
    data::mission::MissionRepository,
    error::{config::ConfigError, news::NewsSourceError, AppError},
    news::{newsapi::NewsApiSource, NewsSource},
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the Sqlite database and brings the schema up to date.
///
/// When `DATABASE_RESET` is enabled every table is dropped and recreated, discarding all
/// data. Otherwise only pending migrations are applied.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with the schema in place
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.database_reset {
        tracing::warn!("DATABASE_RESET is enabled, dropping all tables");
        Migrator::fresh(&db).await?;
    } else {
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}

/// Inserts the fixture mission into an empty database.
pub async fn seed_fixtures(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    if let Some(mission) = MissionRepository::new(db).seed_fixtures().await? {
        tracing::info!("Seeded fixture mission {} ({})", mission.id, mission.place);
    }

    Ok(())
}

/// Builds the HTTP client used for outbound requests.
///
/// Redirects are not followed and requests time out after a fixed delay.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| NewsSourceError::Transport(e).into())
}

/// Builds the News API headline source from configuration.
///
/// A missing API key is not fatal: scenario generation then fails per request.
pub fn setup_news_source(
    config: &Config,
    client: reqwest::Client,
) -> Result<Arc<dyn NewsSource>, AppError> {
    if config.news_api_key.is_none() {
        tracing::warn!("NEWS_API_KEY is not set, scenario generation will be unavailable");
    }

    let source = NewsApiSource::new(
        client,
        &config.news_api_url,
        config.news_api_key.clone(),
        config.news_country.clone(),
    )
    .map_err(|_| ConfigError::InvalidEnvVar {
        name: "NEWS_API_URL".to_string(),
        value: config.news_api_url.clone(),
    })?;

    Ok(Arc::new(source))
}
