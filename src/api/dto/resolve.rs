//! DTOs for the link resolution endpoint.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use crate::domain::entities::{Merchant, ResolvedLink, Strategy};
use crate::error::ErrorInfo;

/// Request to resolve one or more URLs.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveRequest {
    #[validate(length(min = 1, max = 100, message = "Between 1 and 100 URLs per request"))]
    #[validate(nested)]
    pub urls: Vec<ResolveItem>,
}

/// Individual URL to resolve.
///
/// The URL is not required to be well-formed: malformed input is returned
/// unchanged rather than rejected.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ResolveItem {
    #[validate(length(min = 1, max = 4096))]
    pub url: String,

    /// Skips hostname detection and resolves for this merchant.
    pub merchant: Option<Merchant>,
}

/// Response containing batch results.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub summary: BatchSummary,
    pub items: Vec<ResolveResultItem>,
}

/// Individual result. Untagged: success items carry `url`, failures carry `error`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResolveResultItem {
    Success(ResolvedItem),
    Error {
        original_url: String,
        error: ErrorInfo,
    },
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct ResolvedItem {
    pub original_url: String,
    pub url: String,
    pub merchant: Merchant,
    pub strategy: Strategy,
    pub program_id: Option<String>,
}

impl ResolvedItem {
    pub fn new(original_url: String, resolved: ResolvedLink) -> Self {
        Self {
            original_url,
            url: resolved.url,
            merchant: resolved.merchant,
            strategy: resolved.strategy,
            program_id: resolved.program.map(|p| p.id),
        }
    }
}

/// Summary statistics for batch processing.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub tagged: usize,
    pub unchanged: usize,
    pub failed: usize,
}
