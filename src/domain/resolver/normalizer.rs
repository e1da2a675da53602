//! URL cleanup: tracking parameter removal and marketplace shortening.
//!
//! Unlike request-side validation, cleanup never fails. Input that does not
//! parse is handed back untouched.

use regex::Regex;
use std::sync::LazyLock;
use url::{Url, form_urlencoded};

use super::rules::{is_tracking_param, merchant_for_host};
use crate::domain::entities::Merchant;

/// Marketplace product path. Uppercase-only and unanchored at the end: the
/// first ten characters of a longer segment still match.
static PRODUCT_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/dp/([A-Z0-9]{10})").unwrap());

/// Removes tracking noise from a URL.
///
/// # Rules
///
/// 1. Every key listed in [`super::rules::TRACKING_PARAMS`] is dropped from
///    the query. An emptied query loses its `?`. A query with nothing to drop
///    is left byte-for-byte as it was.
/// 2. Marketplace URLs whose path contains `/dp/<10 uppercase alphanumerics>`
///    collapse to `https://<host>/dp/<identifier>`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     clean("https://www.amazon.in/dp/B0123456789/ref=xyz?tag=old&utm_source=x"),
///     "https://www.amazon.in/dp/B012345678"
/// );
/// assert_eq!(clean("not a url"), "not a url");
/// ```
pub fn clean(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => clean_url(parsed).to_string(),
        Err(_) => url.to_string(),
    }
}

/// Same as [`clean`] on an already parsed URL.
pub(crate) fn clean_url(mut url: Url) -> Url {
    strip_tracking_params(&mut url);

    shorten_product_url(&url).unwrap_or(url)
}

fn strip_tracking_params(url: &mut Url) {
    if url.query().is_none() {
        return;
    }

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let kept: Vec<&(String, String)> = pairs
        .iter()
        .filter(|(key, _)| !is_tracking_param(key))
        .collect();

    if kept.len() == pairs.len() {
        return;
    }

    if kept.is_empty() {
        url.set_query(None);
    } else {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(kept.into_iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        url.set_query(Some(&query));
    }
}

fn shorten_product_url(url: &Url) -> Option<Url> {
    let host = url.host_str()?;
    if merchant_for_host(host) != Merchant::Amazon {
        return None;
    }

    let identifier = PRODUCT_PATH_REGEX.captures(url.path())?.get(1)?.as_str();

    Url::parse(&format!("https://{}/dp/{}", host, identifier)).ok()
}
