//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Merchant`] - Storefront tag inferred from a hostname
//! - [`AffiliateProgram`] - Operator-supplied tagging configuration
//! - [`ResolvedLink`] - Result of a single resolution
//! - [`HistoryEntry`] - Persisted record of a resolution
//!
//! Creation and update inputs follow the `NewProgram` / `ProgramPatch` split.

pub mod history;
pub mod merchant;
pub mod program;
pub mod resolved_link;

pub use history::{HistoryEntry, HistorySummary, MerchantShare};
pub use merchant::{Merchant, UnknownMerchant};
pub use program::{AffiliateProgram, NewProgram, ProgramPatch};
pub use resolved_link::{ResolvedLink, Strategy};
