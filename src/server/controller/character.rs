use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use url::Url;

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::character::CharacterImageService, state::AppState},
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// List character image URLs.
///
/// Scans the character image directory and returns an absolute URL for each image,
/// built from the scheme and host the client used to reach the server.
///
/// # Arguments
/// - `state` - Application state containing the image directory
/// - `headers` - Request headers providing `Host` and optionally `X-Forwarded-Proto`
///
/// # Returns
/// - `200 OK` - Image URLs
/// - `400 Bad Request` - Missing or invalid `Host` header
/// - `500 Internal Server Error` - Image directory unreadable
#[utoipa::path(
    get,
    path = "/api/character-images",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully listed character images", body = Vec<String>),
        (status = 400, description = "Invalid host header", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_images(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let base = request_base_url(&headers)?;

    let service = CharacterImageService::new(&state.character_images_dir);

    let urls = service.list_urls(&base).await?;

    Ok(Json(urls))
}

/// Rebuilds `{scheme}://{host}` from the request headers.
fn request_base_url(headers: &HeaderMap) -> Result<Url, AppError> {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| matches!(*value, "http" | "https"))
        .unwrap_or("http");

    let host = headers
        .get(axum::http::header::HOST)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::InvalidInput("Missing host header.".to_string()))?;

    Url::parse(&format!("{}://{}", scheme, host))
        .map_err(|_| AppError::InvalidInput("Invalid host header.".to_string()))
}
