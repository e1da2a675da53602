//! In-process repository implementations.
//!
//! Programs and history live in memory. Programs are seeded from a JSON
//! file at startup.
//!
//! # Repositories
//!
//! - [`InMemoryProgramRepository`] - Affiliate program storage
//! - [`InMemoryHistoryRepository`] - Bounded resolution history

pub mod memory_history_repository;
pub mod memory_program_repository;

pub use memory_history_repository::InMemoryHistoryRepository;
pub use memory_program_repository::InMemoryProgramRepository;
