//! # Affiliate Linker
//!
//! Resolves shopping links into affiliate-tagged links, served over Axum.
//!
//! Given a URL, the service detects the merchant, strips tracking noise,
//! and either tags the link with the operator's own affiliate id for that
//! merchant or wraps it in a fallback affiliate network redirect.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, and the pure resolver
//! - **Application Layer** ([`application`]) - Services orchestrating resolution and history
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores and the programs file loader
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export PROGRAMS_FILE="./programs.json"   # Optional
//! cargo run
//!
//! curl -X POST http://localhost:3000/api/resolve \
//!   -H 'Content-Type: application/json' \
//!   -d '{"urls":[{"url":"https://www.flipkart.com/item/123?utm_source=x"}]}'
//! ```
//!
//! The resolver is usable without the server:
//!
//! ```
//! use affiliate_linker::domain::entities::{AffiliateProgram, Merchant, Strategy};
//! use affiliate_linker::domain::resolver;
//!
//! let programs = vec![AffiliateProgram::new("fk", Merchant::Flipkart, "partner42")];
//! let link = resolver::resolve("https://www.flipkart.com/item/123?utm_source=x", &programs, None);
//!
//! assert_eq!(link.strategy, Strategy::Direct);
//! assert_eq!(link.url, "https://www.flipkart.com/item/123?affid=partner42");
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{HistoryService, ProgramService, ResolverService};
    pub use crate::domain::entities::{AffiliateProgram, Merchant, ResolvedLink, Strategy};
    pub use crate::domain::resolver::{clean, detect, resolve};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
