//! Merchant tag inferred from a URL's hostname.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recognized storefront.
///
/// The set is closed. [`Merchant::Cuelinks`] is reserved for the generic
/// redirect provider used as a fallback program and is never produced by
/// hostname detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Merchant {
    Amazon,
    Flipkart,
    Myntra,
    Ajio,
    Meesho,
    Nykaa,
    Cuelinks,
    Other,
}

impl Merchant {
    /// Every merchant tag, in declaration order.
    pub const ALL: [Merchant; 8] = [
        Merchant::Amazon,
        Merchant::Flipkart,
        Merchant::Myntra,
        Merchant::Ajio,
        Merchant::Meesho,
        Merchant::Nykaa,
        Merchant::Cuelinks,
        Merchant::Other,
    ];

    /// Tag used by programs acting as the redirect fallback.
    pub const FALLBACK: Merchant = Merchant::Cuelinks;

    pub fn as_str(&self) -> &'static str {
        match self {
            Merchant::Amazon => "amazon",
            Merchant::Flipkart => "flipkart",
            Merchant::Myntra => "myntra",
            Merchant::Ajio => "ajio",
            Merchant::Meesho => "meesho",
            Merchant::Nykaa => "nykaa",
            Merchant::Cuelinks => "cuelinks",
            Merchant::Other => "other",
        }
    }

    /// Returns true for the reserved fallback tag.
    pub fn is_fallback(&self) -> bool {
        *self == Self::FALLBACK
    }
}

impl fmt::Display for Merchant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown merchant tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown merchant: {0}")]
pub struct UnknownMerchant(pub String);

impl FromStr for Merchant {
    type Err = UnknownMerchant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Merchant::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownMerchant(s.to_string()))
    }
}
