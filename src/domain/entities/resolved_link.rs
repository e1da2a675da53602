//! Output of a single link resolution.

use serde::{Deserialize, Serialize};

use super::{AffiliateProgram, Merchant};

/// How the final URL was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// A merchant-specific program tagged the cleaned URL.
    Direct,
    /// The fallback redirect provider wrapped the original URL.
    Fallback,
    /// No applicable program; the input was returned untouched.
    Unchanged,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::Fallback => "fallback",
            Strategy::Unchanged => "unchanged",
        }
    }
}

/// A resolved link. Computed fresh on every call and never persisted by the
/// resolver itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub url: String,
    pub merchant: Merchant,
    pub strategy: Strategy,
    pub program: Option<AffiliateProgram>,
}

impl ResolvedLink {
    /// The no-op outcome: original URL, no program.
    pub fn unchanged(url: impl Into<String>, merchant: Merchant) -> Self {
        Self {
            url: url.into(),
            merchant,
            strategy: Strategy::Unchanged,
            program: None,
        }
    }

    pub fn is_tagged(&self) -> bool {
        self.program.is_some()
    }
}
