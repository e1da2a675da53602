//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations
//! - [`program_file`] - JSON programs file loader

pub mod persistence;
pub mod program_file;
