//! Handler for URL cleanup.

use axum::Json;
use validator::Validate;

use crate::api::dto::clean::{CleanRequest, CleanResponse};
use crate::domain::resolver::clean;
use crate::error::AppError;

/// Strips tracking parameters from a URL without tagging it.
///
/// # Endpoint
///
/// `POST /api/clean`
///
/// Malformed URLs are echoed back with `"changed": false`.
///
/// # Errors
///
/// Returns 400 if `url` is empty or too long.
pub async fn clean_handler(
    Json(payload): Json<CleanRequest>,
) -> Result<Json<CleanResponse>, AppError> {
    payload.validate()?;

    let cleaned = clean(&payload.url);
    let changed = cleaned != payload.url;

    Ok(Json(CleanResponse {
        url: payload.url,
        cleaned,
        changed,
    }))
}
