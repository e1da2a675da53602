//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`resolver`] - Pure affiliate link resolution engine
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - The resolver is stateless; services in [`crate::application::services`]
//!   supply it with programs and persist its results
//!
//! # Resolution Flow
//!
//! 1. An HTTP handler receives a URL
//! 2. [`crate::application::services::ResolverService`] loads programs from
//!    [`repositories::ProgramRepository`]
//! 3. [`resolver::resolve`] detects, cleans and tags the URL
//! 4. The outcome is recorded via [`repositories::HistoryRepository`]

pub mod entities;
pub mod repositories;
pub mod resolver;
