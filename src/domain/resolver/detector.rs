//! Merchant detection from a URL's hostname.

use url::Url;

use super::rules::merchant_for_host;
use crate::domain::entities::Merchant;

/// Detects the merchant a URL belongs to.
///
/// Never fails: unparseable input and URLs without a host yield
/// [`Merchant::Other`]. Matching is case-insensitive and tolerant of `www.`
/// and regional TLDs.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(detect("https://www.amazon.in/dp/B012345678"), Merchant::Amazon);
/// assert_eq!(detect("not a url"), Merchant::Other);
/// ```
pub fn detect(url: &str) -> Merchant {
    let Ok(parsed) = Url::parse(url) else {
        return Merchant::Other;
    };

    parsed
        .host_str()
        .map(merchant_for_host)
        .unwrap_or(Merchant::Other)
}
