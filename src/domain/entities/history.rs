//! History entry recorded for every resolution made through the service layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Merchant, ResolvedLink, Strategy};

/// A persisted resolution record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: String,
    pub original_url: String,
    pub resolved_url: String,
    pub merchant: Merchant,
    pub strategy: Strategy,
    pub program_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Builds an entry from a resolution result.
    pub fn from_resolution(
        id: String,
        original_url: String,
        resolved: &ResolvedLink,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            resolved_url: resolved.url.clone(),
            merchant: resolved.merchant,
            strategy: resolved.strategy,
            program_id: resolved.program.as_ref().map(|p| p.id.clone()),
            created_at,
        }
    }

    pub fn is_tagged(&self) -> bool {
        self.strategy != Strategy::Unchanged
    }
}

/// Per-merchant aggregate row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantShare {
    pub merchant: Merchant,
    pub count: usize,
    /// Share of all entries, in percent, rounded to one decimal place.
    pub percentage: f64,
}

/// Aggregated view over the recorded history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total: usize,
    pub tagged: usize,
    pub unchanged: usize,
    pub merchants: Vec<MerchantShare>,
}
