//! HTTP request handlers.
//!
//! Each submodule groups the endpoints of one resource. Handlers extract request data,
//! convert DTOs into domain params, call the matching service and convert the result
//! back into DTOs. Every handler is annotated with `#[utoipa::path]` and registered in
//! [`ApiDoc`](crate::server::doc::ApiDoc).

pub mod character;
pub mod game;
pub mod mission;
pub mod scenario;

use axum::{extract::rejection::JsonRejection, Json};

#[cfg(test)]
mod test;

/// Unwraps an optional request body.
///
/// An unparsable body counts as an absent one, so the service still checks that the
/// target exists before reporting the missing input.
pub(crate) fn parsed_body<T>(payload: Result<Json<T>, JsonRejection>) -> Option<T> {
    match payload {
        Ok(Json(body)) => Some(body),
        Err(rejection) => {
            tracing::debug!("Ignoring request body: {}", rejection.body_text());
            None
        }
    }
}
