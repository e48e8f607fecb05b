// src/error.rs

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    Internal(String),

    // 400 Bad Request: query argument outside the accepted values
    InvalidParameter(String),

    // 400 Bad Request: write payload failed schema validation
    Validation(String),

    // 401 Unauthorized: uniform message regardless of which check failed
    Auth(String),

    // 404 Not Found: fewer matching rows than requested
    InsufficientData(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::InvalidParameter(msg) | AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Auth(msg) => {
                // A 401 must carry the Basic challenge so clients re-prompt
                // for credentials.
                let body = Json(json!({ "error": msg }));
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Basic")],
                    body,
                )
                    .into_response();
            }
            AppError::InsufficientData(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Demonstration-only custom error: renders 418 with a structured payload
/// carrying the request URL and a timestamp. No business meaning.
#[derive(Debug)]
pub struct TeapotError {
    pub url: String,
    pub name: String,
    pub date: String,
}

impl IntoResponse for TeapotError {
    fn into_response(self) -> Response {
        tracing::error!("TeapotError occurred: {} at {}", self.name, self.url);
        let body = Json(json!({
            "url": self.url,
            "name": self.name,
            "message": "This error is my own",
            "date": self.date,
        }));
        (StatusCode::IM_A_TEAPOT, body).into_response()
    }
}
