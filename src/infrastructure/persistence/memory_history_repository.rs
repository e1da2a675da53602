//! In-process, bounded implementation of the history repository.

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::domain::entities::HistoryEntry;
use crate::domain::repositories::HistoryRepository;
use crate::error::AppError;

/// History store holding at most `capacity` entries.
///
/// When full, recording a new entry evicts the oldest one.
pub struct InMemoryHistoryRepository {
    entries: RwLock<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl InMemoryHistoryRepository {
    /// Creates an empty store. A `capacity` of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn record(&self, entry: HistoryEntry) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, AppError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }

    async fn all(&self) -> Result<Vec<HistoryEntry>, AppError> {
        Ok(self.entries.read().await.iter().cloned().collect())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() != before)
    }

    async fn clear(&self) -> Result<usize, AppError> {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        Ok(dropped)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.entries.read().await.len())
    }
}
