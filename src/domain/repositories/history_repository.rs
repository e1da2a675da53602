//! Repository trait for resolution history.

use crate::domain::entities::HistoryEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Key-value style storage for [`HistoryEntry`] records.
///
/// Implementations may evict old entries; callers must not assume the full
/// history is retained.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Appends an entry.
    async fn record(&self, entry: HistoryEntry) -> Result<(), AppError>;

    /// Returns up to `limit` entries, newest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, AppError>;

    /// Returns every retained entry, oldest first.
    async fn all(&self) -> Result<Vec<HistoryEntry>, AppError>;

    /// Removes one entry. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Removes every entry and returns how many were dropped.
    async fn clear(&self) -> Result<usize, AppError>;

    /// Counts retained entries.
    async fn count(&self) -> Result<usize, AppError>;
}
