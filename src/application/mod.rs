//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and the resolver. Services consume repository traits and provide
//! a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Link resolution with history recording
//! - [`services::program_service::ProgramService`] - Affiliate program management
//! - [`services::history_service::HistoryService`] - History listing and aggregation

pub mod services;
