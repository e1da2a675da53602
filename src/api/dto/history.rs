//! DTOs for resolution history.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::HistoryEntry;

/// Query parameters for `GET /api/history`.
///
/// Uses `serde_with` to parse the limit from the query string.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub total: usize,
    pub items: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    pub dropped: usize,
}
