// src/handlers/errors.rs

use axum::extract::OriginalUri;

use crate::error::TeapotError;

/// Always fails with the demonstration 418 error, exercising the custom
/// error rendering path end to end.
#[utoipa::path(
    get,
    path = "/my_custom_exception",
    tag = "errors",
    responses(
        (status = 418, description = "This error is my own")
    )
)]
pub async fn get_my_custom_exception(OriginalUri(uri): OriginalUri) -> Result<(), TeapotError> {
    Err(TeapotError {
        url: uri.to_string(),
        name: "my error".to_string(),
        date: chrono::Local::now().to_string(),
    })
}
