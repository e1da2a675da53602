//! Repository trait for affiliate program data access.

use crate::domain::entities::{AffiliateProgram, ProgramPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the operator's affiliate programs.
///
/// Order matters: [`list`](ProgramRepository::list) must return programs in
/// insertion order, because the resolver picks the first active match.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryProgramRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Stores a new program.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a program with the same id exists.
    async fn create(&self, program: AffiliateProgram) -> Result<AffiliateProgram, AppError>;

    /// Finds a program by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<AffiliateProgram>, AppError>;

    /// Lists all programs in insertion order.
    async fn list(&self) -> Result<Vec<AffiliateProgram>, AppError>;

    /// Partially updates a program.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no program has this id.
    async fn update(&self, id: &str, patch: ProgramPatch) -> Result<AffiliateProgram, AppError>;

    /// Removes a program. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Counts stored programs.
    async fn count(&self) -> Result<usize, AppError>;
}
