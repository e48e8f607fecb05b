// src/handlers/home.rs

use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Liveness probe; requires no credentials.
#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "API is up")
    )
)]
pub async fn read_root() -> impl IntoResponse {
    Json(json!({ "message": "API is working" }))
}

/// Demonstration endpoint whose OpenAPI entry documents error codes the
/// handler never actually produces.
#[utoipa::path(
    get,
    path = "/thing",
    tag = "errors",
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Item not found"),
        (status = 302, description = "The item was moved"),
        (status = 403, description = "Not enough privileges")
    )
)]
pub async fn get_thing() -> impl IntoResponse {
    Json(json!({ "data": "hello world" }))
}
