use std::{path::Path, sync::Arc};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{news::stub::StubNewsSource, router::api_router, state::AppState};

mod character;

fn state(db: &DatabaseConnection, news: StubNewsSource, images: &Path) -> AppState {
    AppState::new(
        db.clone(),
        Arc::new(news),
        "technology".to_string(),
        images.to_path_buf(),
    )
}

fn default_state(db: &DatabaseConnection) -> AppState {
    state(db, StubNewsSource::empty(), Path::new("public/images/characters"))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::HOST, "localhost:3000")
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost:3000")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a request with a verbatim body and an optional `Content-Type`.
fn raw_request(method: Method, uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost:3000");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Sends a request through the API router and decodes the JSON response body.
async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = api_router()
        .with_state(state)
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn user(id: &str) -> Value {
    json!({
        "id": id,
        "character": {
            "id": format!("char-{}", id),
            "userId": id,
            "imageUrl": "http://localhost:3000/images/characters/agent.png",
            "coverName": format!("Agent {}", id),
            "description": "Infiltration",
            "createdAt": "2024-03-12T08:30:00Z",
            "deletedAt": null
        }
    })
}
