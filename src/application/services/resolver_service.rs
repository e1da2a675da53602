//! Link resolution service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{HistoryEntry, Merchant, ResolvedLink};
use crate::domain::repositories::{HistoryRepository, ProgramRepository};
use crate::domain::resolver;
use crate::error::AppError;
use crate::utils::code_generator::generate_id;

/// Runs the resolver against the stored programs and records the outcome.
///
/// The resolver itself is pure; this service supplies its inputs and
/// persists what it returns. A failure to write history is logged and does
/// not fail the resolution.
pub struct ResolverService<P: ProgramRepository, H: HistoryRepository> {
    program_repository: Arc<P>,
    history_repository: Arc<H>,
}

impl<P: ProgramRepository, H: HistoryRepository> ResolverService<P, H> {
    /// Creates a new resolver service.
    pub fn new(program_repository: Arc<P>, history_repository: Arc<H>) -> Self {
        Self {
            program_repository,
            history_repository,
        }
    }

    /// Resolves a single URL and records it in the history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only if programs cannot be loaded.
    /// Malformed URLs and missing programs are not errors; they yield an
    /// unchanged link.
    pub async fn resolve(
        &self,
        url: &str,
        merchant: Option<Merchant>,
    ) -> Result<ResolvedLink, AppError> {
        let programs = self.program_repository.list().await?;
        let resolved = resolver::resolve(url, &programs, merchant);

        tracing::debug!(
            merchant = %resolved.merchant,
            strategy = resolved.strategy.as_str(),
            program = resolved.program.as_ref().map(|p| p.id.as_str()),
            "Link resolved"
        );
        metrics::counter!("links_resolved_total", "strategy" => resolved.strategy.as_str())
            .increment(1);

        let entry = HistoryEntry::from_resolution(generate_id(), url.to_string(), &resolved, Utc::now());
        if let Err(e) = self.history_repository.record(entry).await {
            tracing::warn!(error = %e, "Failed to record resolution history");
        }

        Ok(resolved)
    }
}
