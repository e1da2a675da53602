//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence seams of the service. The resolver core
//! never touches them; application services load programs and record history
//! through them.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ProgramRepository`] - Affiliate program CRUD
//! - [`HistoryRepository`] - Resolution history storage

pub mod history_repository;
pub mod program_repository;

pub use history_repository::HistoryRepository;
pub use program_repository::ProgramRepository;

#[cfg(test)]
pub use history_repository::MockHistoryRepository;
#[cfg(test)]
pub use program_repository::MockProgramRepository;
