//! Resolution history and analytics service.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{HistoryEntry, HistorySummary, Merchant, MerchantShare};
use crate::domain::repositories::HistoryRepository;
use crate::error::AppError;
use serde_json::json;

/// Default number of entries returned by [`HistoryService::recent`].
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Upper bound on entries returned by [`HistoryService::recent`].
pub const MAX_HISTORY_LIMIT: usize = 500;

/// Service for browsing and aggregating recorded resolutions.
pub struct HistoryService<R: HistoryRepository> {
    repository: Arc<R>,
}

impl<R: HistoryRepository> HistoryService<R> {
    /// Creates a new history service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns recent entries, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_HISTORY_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is zero or above
    /// [`MAX_HISTORY_LIMIT`].
    pub async fn recent(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

        if limit == 0 || limit > MAX_HISTORY_LIMIT {
            return Err(AppError::bad_request(
                format!("Limit must be between 1 and {}", MAX_HISTORY_LIMIT),
                json!({ "limit": limit }),
            ));
        }

        self.repository.list_recent(limit).await
    }

    /// Aggregates the retained history per merchant.
    pub async fn summary(&self) -> Result<HistorySummary, AppError> {
        let entries = self.repository.all().await?;
        Ok(summarize(&entries))
    }

    /// Deletes a single entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(
                "History entry not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    /// Drops every entry, returning how many were removed.
    pub async fn clear(&self) -> Result<usize, AppError> {
        let dropped = self.repository.clear().await?;
        tracing::info!(dropped, "History cleared");
        Ok(dropped)
    }

    /// Counts retained entries.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

/// Groups entries by merchant.
///
/// Rows are sorted by count descending, ties broken by merchant order.
/// Percentages are rounded to one decimal place.
pub fn summarize(entries: &[HistoryEntry]) -> HistorySummary {
    let total = entries.len();
    let tagged = entries.iter().filter(|e| e.is_tagged()).count();

    let mut counts: BTreeMap<Merchant, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.merchant).or_default() += 1;
    }

    let mut merchants: Vec<MerchantShare> = counts
        .into_iter()
        .map(|(merchant, count)| MerchantShare {
            merchant,
            count,
            percentage: percentage(count, total),
        })
        .collect();
    merchants.sort_by(|a, b| b.count.cmp(&a.count).then(a.merchant.cmp(&b.merchant)));

    HistorySummary {
        total,
        tagged,
        unchanged: total - tagged,
        merchants,
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}
