// src/utils/basic_auth.rs

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use subtle::ConstantTimeEq;

use crate::{config::Config, error::AppError};

/// Credentials recovered from an 'Authorization: Basic' header.
#[derive(Debug, Clone)]
struct BasicCredentials {
    username: String,
    password: String,
}

/// The username attached to the request after a successful check.
/// Handlers can read it from the request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

fn parse_basic_header(req: &Request<Body>) -> Option<BasicCredentials> {
    let header_value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

fn passwords_match(provided: &str, expected: &str) -> bool {
    ConstantTimeEq::ct_eq(provided.as_bytes(), expected.as_bytes()).into()
}

fn incorrect_credentials() -> AppError {
    AppError::Auth("Incorrect username or password".to_string())
}

/// Axum Middleware: read-access authentication.
///
/// Validates Basic credentials against the static user table. The response
/// is identical for unknown users and wrong passwords; the log line records
/// which check failed.
pub async fn user_auth_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = parse_basic_header(&req).ok_or_else(incorrect_credentials)?;

    match config.users.get(&credentials.username) {
        Some(expected) if passwords_match(&credentials.password, expected) => {
            tracing::info!("User {} authenticated successfully", credentials.username);
            req.extensions_mut()
                .insert(AuthenticatedUser(credentials.username));
            Ok(next.run(req).await)
        }
        Some(_) => {
            tracing::error!(
                "Authentication failed for user {}: wrong password",
                credentials.username
            );
            Err(incorrect_credentials())
        }
        None => {
            tracing::error!(
                "Authentication failed for user {}: unknown user",
                credentials.username
            );
            Err(incorrect_credentials())
        }
    }
}

/// Axum Middleware: admin (write-access) authentication.
///
/// A single fixed 'admin' credential, independent of the user table. No
/// caching, lockout, or rate limiting; the check runs on every request.
pub async fn admin_auth_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credentials =
        parse_basic_header(&req).ok_or_else(|| AppError::Auth("Unauthorized".to_string()))?;

    if credentials.username != "admin"
        || !passwords_match(&credentials.password, &config.admin_password)
    {
        tracing::error!(
            "Admin authentication failed for user: {}",
            credentials.username
        );
        return Err(AppError::Auth("Unauthorized".to_string()));
    }

    tracing::info!("Admin authenticated successfully");
    req.extensions_mut()
        .insert(AuthenticatedUser(credentials.username));
    Ok(next.run(req).await)
}
