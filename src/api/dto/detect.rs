//! DTOs for merchant detection.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Merchant;

/// Query string for `GET /api/detect`.
#[derive(Debug, Deserialize)]
pub struct DetectQuery {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub url: String,
    pub merchant: Merchant,
    /// Query key used to tag this merchant when a program does not override it.
    pub default_tracking_param: &'static str,
}
