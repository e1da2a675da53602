//! Handler for merchant detection.

use axum::{Json, extract::Query};

use crate::api::dto::detect::{DetectQuery, DetectResponse};
use crate::domain::resolver::{detect, rules::default_tracking_param};

/// Detects the merchant for a URL.
///
/// # Endpoint
///
/// `GET /api/detect?url=...`
///
/// Never fails for a present `url`: anything unrecognized is `"other"`.
pub async fn detect_handler(Query(query): Query<DetectQuery>) -> Json<DetectResponse> {
    let merchant = detect(&query.url);

    Json(DetectResponse {
        url: query.url,
        merchant,
        default_tracking_param: default_tracking_param(merchant),
    })
}
