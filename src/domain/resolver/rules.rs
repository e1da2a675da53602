//! Declarative merchant rules.
//!
//! Hostname patterns, default tracking parameters and the set of query keys
//! treated as tracking noise. Adding a merchant means adding rows here, not
//! touching the resolver's control flow.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::Merchant;

/// Base URL of the fallback redirect provider when a program leaves
/// `base_url` unset.
pub const DEFAULT_FALLBACK_BASE_URL: &str = "https://linksredirect.com/";

/// Constant `source` value expected by the fallback provider.
pub const FALLBACK_SOURCE: &str = "linkkit";

/// Query keys removed by the normalizer regardless of merchant.
pub const TRACKING_PARAMS: &[&str] = &[
    // affiliate tags
    "tag",
    "affid",
    "aff_id",
    "affExtParam1",
    "affExtParam2",
    "ascsubtag",
    "linkCode",
    "linkId",
    "creative",
    "creativeASIN",
    // referral markers
    "ref",
    "ref_",
    // click identifiers
    "gclid",
    "dclid",
    "fbclid",
    "msclkid",
    "mc_cid",
    "mc_eid",
    // campaign parameters
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "utm_id",
];

/// Hostname patterns checked in order; the first match wins.
///
/// Each pattern is anchored at a label boundary so `www.` prefixes and
/// regional TLDs match while look-alike hosts (`notamazon.com`) do not.
static MERCHANT_PATTERNS: LazyLock<Vec<(Merchant, Regex)>> = LazyLock::new(|| {
    [
        (Merchant::Amazon, r"(?i)(?:^|\.)(?:amazon|amzn)\."),
        (Merchant::Flipkart, r"(?i)(?:^|\.)(?:flipkart|fkrt)\."),
        (Merchant::Myntra, r"(?i)(?:^|\.)myntra\."),
        (Merchant::Ajio, r"(?i)(?:^|\.)ajio\."),
        (Merchant::Meesho, r"(?i)(?:^|\.)meesho\."),
        (Merchant::Nykaa, r"(?i)(?:^|\.)nykaa(?:fashion|man)?\."),
    ]
    .into_iter()
    .map(|(merchant, pattern)| (merchant, Regex::new(pattern).unwrap()))
    .collect()
});

/// Returns the merchant whose hostname pattern matches `host`.
pub fn merchant_for_host(host: &str) -> Merchant {
    MERCHANT_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(host))
        .map(|(merchant, _)| *merchant)
        .unwrap_or(Merchant::Other)
}

/// Query key carrying the affiliate identifier when a program does not
/// override it.
pub fn default_tracking_param(merchant: Merchant) -> &'static str {
    match merchant {
        Merchant::Amazon => "tag",
        Merchant::Flipkart => "affid",
        Merchant::Myntra | Merchant::Ajio | Merchant::Meesho | Merchant::Nykaa => "aff_id",
        Merchant::Cuelinks => "subid",
        Merchant::Other => "ref",
    }
}

pub fn is_tracking_param(key: &str) -> bool {
    TRACKING_PARAMS.contains(&key)
}
