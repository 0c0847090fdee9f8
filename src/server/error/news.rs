use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum NewsSourceError {
    /// The source answered successfully but returned no headlines.
    ///
    /// Results in a 404 Not Found; no scenario is created.
    #[error("No news articles found")]
    NoArticles,

    /// No API key was configured for the source.
    #[error("News API key is not configured")]
    MissingApiKey,

    /// Request could not be sent or its body could not be read.
    #[error("News request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("News API responded with status {status}: {body}")]
    Status {
        /// HTTP status code returned by the source
        status: u16,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// The response body was not a valid headlines payload.
    #[error("Invalid news payload: {0}")]
    Decode(String),
}

/// Converts headline source errors into HTTP responses.
///
/// An empty result is reported to the client as 404 so it can be told apart from an
/// unreachable source. Every other failure is logged and returned as a generic 500.
impl IntoResponse for NewsSourceError {
    fn into_response(self) -> Response {
        match self {
            Self::NoArticles => {
                error_response(StatusCode::NOT_FOUND, "No news articles found.".to_string())
            }
            err => {
                tracing::error!("Error generating scenario: {}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error generating scenario.".to_string(),
                )
            }
        }
    }
}
