//! Handler for the link resolution endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::resolve::{
    BatchSummary, ResolveItem, ResolveRequest, ResolveResponse, ResolveResultItem, ResolvedItem,
};
use crate::domain::entities::Strategy;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves one or more URLs against the configured affiliate programs.
///
/// # Endpoint
///
/// `POST /api/resolve`
///
/// # Batch Processing
///
/// URLs are processed independently. A URL that cannot be tagged is not an
/// error: it comes back unchanged with `"strategy": "unchanged"`. Only
/// storage failures produce per-item errors.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     { "url": "https://www.flipkart.com/item/123?utm_campaign=promo" },
///     { "url": "https://dl.example.com/p/1", "merchant": "flipkart" }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 1, "tagged": 1, "unchanged": 0, "failed": 0 },
///   "items": [
///     {
///       "original_url": "https://www.flipkart.com/item/123?utm_campaign=promo",
///       "url": "https://www.flipkart.com/item/123?affid=partner42",
///       "merchant": "flipkart",
///       "strategy": "direct",
///       "program_id": "fk"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    payload.validate()?;

    let mut summary = BatchSummary {
        total: payload.urls.len(),
        ..Default::default()
    };
    let mut items = Vec::with_capacity(summary.total);

    for ResolveItem { url, merchant } in payload.urls {
        match state.resolver_service.resolve(&url, merchant).await {
            Ok(resolved) => {
                if resolved.strategy == Strategy::Unchanged {
                    summary.unchanged += 1;
                } else {
                    summary.tagged += 1;
                }
                items.push(ResolveResultItem::Success(ResolvedItem::new(url, resolved)));
            }
            Err(err) => {
                summary.failed += 1;
                items.push(ResolveResultItem::Error {
                    original_url: url,
                    error: err.to_error_info(),
                });
            }
        }
    }

    Ok(Json(ResolveResponse { summary, items }))
}
