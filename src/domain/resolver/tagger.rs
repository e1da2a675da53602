//! Affiliate tagging: program selection, direct tagging and fallback redirects.

use url::{Url, form_urlencoded};

use super::detector::detect;
use super::normalizer::clean_url;
use super::rules::{DEFAULT_FALLBACK_BASE_URL, FALLBACK_SOURCE, default_tracking_param};
use crate::domain::entities::{AffiliateProgram, Merchant, ResolvedLink, Strategy};

/// Resolves `url` against the operator's affiliate programs.
///
/// # Pipeline
///
/// 1. Merchant: `explicit_merchant` when given, otherwise [`detect`].
/// 2. Program: the first active program for that merchant; failing that, the
///    first active fallback program ([`Merchant::FALLBACK`]).
/// 3. Direct programs tag the cleaned URL with their tracking parameter,
///    replacing any previous value of that key.
/// 4. Fallback programs wrap the original URL in the provider's redirect.
///
/// A missing program, a program without an affiliate identifier, or a URL
/// that does not parse all produce [`Strategy::Unchanged`] with the input
/// returned as-is. This function never fails.
///
/// Feeding a fallback redirect produced by the active fallback program back
/// in resolves its embedded target instead, so resolving twice yields the
/// same URL as resolving once.
pub fn resolve(
    url: &str,
    programs: &[AffiliateProgram],
    explicit_merchant: Option<Merchant>,
) -> ResolvedLink {
    let fallback = find_fallback(programs);

    if let Some(target) = fallback.and_then(|program| unwrap_redirect(url, program)) {
        let resolved = resolve_target(&target, programs, explicit_merchant, fallback);
        if resolved.strategy != Strategy::Unchanged {
            return resolved;
        }
        let merchant = explicit_merchant.unwrap_or_else(|| detect(url));
        return ResolvedLink::unchanged(url, merchant);
    }

    resolve_target(url, programs, explicit_merchant, fallback)
}

fn resolve_target(
    url: &str,
    programs: &[AffiliateProgram],
    explicit_merchant: Option<Merchant>,
    fallback: Option<&AffiliateProgram>,
) -> ResolvedLink {
    let merchant = explicit_merchant.unwrap_or_else(|| detect(url));

    if let Some(program) = find_direct(programs, merchant) {
        return match tag_direct(url, program) {
            Some(tagged) => ResolvedLink {
                url: tagged,
                merchant,
                strategy: Strategy::Direct,
                program: Some(program.clone()),
            },
            None => ResolvedLink::unchanged(url, merchant),
        };
    }

    match fallback.and_then(|program| Some((program, wrap_fallback(url, program)?))) {
        Some((program, redirect)) => ResolvedLink {
            url: redirect,
            merchant,
            strategy: Strategy::Fallback,
            program: Some(program.clone()),
        },
        None => ResolvedLink::unchanged(url, merchant),
    }
}

fn find_direct(programs: &[AffiliateProgram], merchant: Merchant) -> Option<&AffiliateProgram> {
    if merchant.is_fallback() {
        return None;
    }
    programs
        .iter()
        .find(|program| program.active && program.merchant == merchant)
}

fn find_fallback(programs: &[AffiliateProgram]) -> Option<&AffiliateProgram> {
    programs
        .iter()
        .find(|program| program.active && program.merchant.is_fallback())
}

fn tag_direct(url: &str, program: &AffiliateProgram) -> Option<String> {
    let affiliate_id = program.affiliate_id()?;
    let parsed = Url::parse(url).ok()?;
    if !parsed.has_host() {
        return None;
    }

    let mut cleaned = clean_url(parsed);
    let param = program
        .tracking_param()
        .unwrap_or_else(|| default_tracking_param(program.merchant));
    set_query_param(&mut cleaned, param, affiliate_id);

    Some(cleaned.to_string())
}

fn wrap_fallback(url: &str, program: &AffiliateProgram) -> Option<String> {
    let cid = program.affiliate_id()?;
    if !Url::parse(url).is_ok_and(|parsed| parsed.has_host()) {
        return None;
    }

    let mut redirect = Url::parse(fallback_base(program)).ok()?;

    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("cid", cid)
        .append_pair("source", FALLBACK_SOURCE)
        .append_pair("url", url);
    if let Some(sub_identifier) = program.sub_identifier() {
        query.append_pair("subid", sub_identifier);
    }
    redirect.set_query(Some(&query.finish()));

    Some(redirect.to_string())
}

/// Returns the target embedded in a redirect built by `program`, if `url` is one.
///
/// Only redirects `program` could rebuild qualify: it must carry an
/// affiliate id and the target must be an absolute URL with a host.
fn unwrap_redirect(url: &str, program: &AffiliateProgram) -> Option<String> {
    program.affiliate_id()?;
    let parsed = Url::parse(url).ok()?;
    let base = Url::parse(fallback_base(program)).ok()?;

    if parsed.host_str()? != base.host_str()? {
        return None;
    }

    parsed
        .query_pairs()
        .find(|(key, _)| key == "url")
        .map(|(_, target)| target.into_owned())
        .filter(|target| Url::parse(target).is_ok_and(|t| t.has_host()))
}

fn fallback_base(program: &AffiliateProgram) -> &str {
    program
        .base_url
        .as_deref()
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_FALLBACK_BASE_URL)
}

/// Sets `key=value`, dropping every previous occurrence of `key`.
fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let query = {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in url.query_pairs().filter(|(k, _)| k != key) {
            serializer.append_pair(&k, &v);
        }
        serializer.append_pair(key, value);
        serializer.finish()
    };

    url.set_query(Some(&query));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flipkart_program() -> AffiliateProgram {
        let mut program = AffiliateProgram::new("fk", Merchant::Flipkart, "partner42");
        program.tracking_param = Some("affid".to_string());
        program
    }

    fn fallback_program() -> AffiliateProgram {
        let mut program = AffiliateProgram::new("cl", Merchant::Cuelinks, "cid1");
        program.sub_identifier = Some("sub1".to_string());
        program.credential = Some("api-secret".to_string());
        program
    }

    #[test]
    fn test_direct_tag_replaces_campaign_params() {
        let programs = vec![flipkart_program()];

        let resolved = resolve(
            "https://www.flipkart.com/item/123?utm_campaign=promo",
            &programs,
            None,
        );

        assert_eq!(resolved.url, "https://www.flipkart.com/item/123?affid=partner42");
        assert_eq!(resolved.strategy, Strategy::Direct);
        assert_eq!(resolved.merchant, Merchant::Flipkart);
        assert_eq!(resolved.program.unwrap().id, "fk");
    }

    #[test]
    fn test_direct_tag_uses_merchant_default_param() {
        let programs = vec![AffiliateProgram::new("amz", Merchant::Amazon, "mytag-21")];

        let resolved = resolve(
            "https://www.amazon.in/Echo/dp/B07XJ8C8F5/ref=sr_1_1?tag=someoneelse-21&th=1",
            &programs,
            None,
        );

        assert_eq!(resolved.url, "https://www.amazon.in/dp/B07XJ8C8F5?tag=mytag-21");
    }

    #[test]
    fn test_direct_tag_keeps_other_params() {
        let programs = vec![AffiliateProgram::new("myn", Merchant::Myntra, "m-77")];

        let resolved = resolve("https://www.myntra.com/shoes?size=9&aff_id=old", &programs, None);

        assert_eq!(resolved.url, "https://www.myntra.com/shoes?size=9&aff_id=m-77");
    }

    #[test]
    fn test_custom_param_is_replaced_not_duplicated() {
        let mut program = AffiliateProgram::new("fk", Merchant::Flipkart, "new");
        program.tracking_param = Some("partner".to_string());

        let resolved = resolve(
            "https://www.flipkart.com/item?partner=old&partner=older",
            &[program],
            None,
        );

        assert_eq!(resolved.url, "https://www.flipkart.com/item?partner=new");
    }

    #[test]
    fn test_first_active_program_wins() {
        let mut inactive = AffiliateProgram::new("fk-old", Merchant::Flipkart, "old");
        inactive.active = false;
        let first = AffiliateProgram::new("fk-1", Merchant::Flipkart, "one");
        let second = AffiliateProgram::new("fk-2", Merchant::Flipkart, "two");

        let resolved = resolve(
            "https://www.flipkart.com/item",
            &[inactive, first, second],
            None,
        );

        assert_eq!(resolved.url, "https://www.flipkart.com/item?affid=one");
        assert_eq!(resolved.program.unwrap().id, "fk-1");
    }

    #[test]
    fn test_explicit_merchant_overrides_detection() {
        let programs = vec![flipkart_program()];

        let resolved = resolve(
            "https://dl.example-deals.com/p/1",
            &programs,
            Some(Merchant::Flipkart),
        );

        assert_eq!(resolved.url, "https://dl.example-deals.com/p/1?affid=partner42");
        assert_eq!(resolved.merchant, Merchant::Flipkart);
    }

    #[test]
    fn test_no_program_returns_original() {
        let mut inactive_fallback = fallback_program();
        inactive_fallback.active = false;
        let programs = vec![flipkart_program(), inactive_fallback];
        let input = "https://www.ajio.com/p/1?utm_source=x";

        let resolved = resolve(input, &programs, None);

        assert_eq!(resolved.url, input);
        assert!(resolved.program.is_none());
        assert_eq!(resolved.strategy, Strategy::Unchanged);
        assert_eq!(resolved.merchant, Merchant::Ajio);
    }

    #[test]
    fn test_empty_programs_returns_original() {
        let resolved = resolve("https://www.amazon.in/dp/B07XJ8C8F5?tag=x", &[], None);

        assert_eq!(resolved.url, "https://www.amazon.in/dp/B07XJ8C8F5?tag=x");
        assert!(resolved.program.is_none());
    }

    #[test]
    fn test_direct_program_without_identifier_is_noop() {
        let mut program = flipkart_program();
        program.affiliate_id = None;
        let programs = vec![program, fallback_program()];

        let resolved = resolve("https://www.flipkart.com/item", &programs, None);

        assert_eq!(resolved.url, "https://www.flipkart.com/item");
        assert!(resolved.program.is_none());
    }

    #[test]
    fn test_fallback_redirect_shape() {
        let programs = vec![fallback_program()];
        let original = "https://www.ajio.com/p/1?utm_source=x";

        let resolved = resolve(original, &programs, None);

        assert_eq!(resolved.strategy, Strategy::Fallback);
        assert_eq!(resolved.program.as_ref().unwrap().id, "cl");

        let redirect = Url::parse(&resolved.url).unwrap();
        assert_eq!(redirect.host_str(), Some("linksredirect.com"));
        let pairs: Vec<(String, String)> = redirect.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("cid".to_string(), "cid1".to_string()),
                ("source".to_string(), "linkkit".to_string()),
                ("url".to_string(), original.to_string()),
                ("subid".to_string(), "sub1".to_string()),
            ]
        );
        assert!(!resolved.url.contains("api-secret"));
    }

    #[test]
    fn test_fallback_without_sub_identifier() {
        let mut program = fallback_program();
        program.sub_identifier = None;

        let resolved = resolve("https://example.com/a", &[program], None);

        assert_eq!(
            resolved.url,
            "https://linksredirect.com/?cid=cid1&source=linkkit&url=https%3A%2F%2Fexample.com%2Fa"
        );
    }

    #[test]
    fn test_fallback_custom_base_url() {
        let mut program = fallback_program();
        program.base_url = Some("https://go.example.net/r".to_string());

        let resolved = resolve("https://example.com/a", &[program], None);

        assert!(resolved.url.starts_with("https://go.example.net/r?cid=cid1&"));
    }

    #[test]
    fn test_fallback_is_never_a_direct_match() {
        let programs = vec![fallback_program()];

        let resolved = resolve("https://example.com/a", &programs, Some(Merchant::Cuelinks));

        assert_eq!(resolved.strategy, Strategy::Fallback);
    }

    #[test]
    fn test_fallback_skips_unparseable_input() {
        let programs = vec![fallback_program()];

        let resolved = resolve("not a url", &programs, None);

        assert_eq!(resolved.url, "not a url");
        assert!(resolved.program.is_none());
    }

    #[test]
    fn test_direct_parse_failure_is_noop() {
        let programs = vec![flipkart_program()];

        let resolved = resolve("flipkart item 123", &programs, Some(Merchant::Flipkart));

        assert_eq!(resolved.url, "flipkart item 123");
        assert!(resolved.program.is_none());
        assert_eq!(resolved.strategy, Strategy::Unchanged);
    }

    #[test]
    fn test_resolve_twice_is_stable_direct() {
        let programs = vec![flipkart_program(), AffiliateProgram::new("amz", Merchant::Amazon, "t-21")];

        for input in [
            "https://www.flipkart.com/item/123?utm_campaign=promo&pid=9",
            "https://www.amazon.in/dp/B0123456789/ref=xyz?tag=old&utm_source=x",
            "https://www.amazon.in/s?k=a%20b&tag=old",
        ] {
            let once = resolve(input, &programs, None);
            let twice = resolve(&once.url, &programs, None);
            assert_eq!(twice.url, once.url, "not idempotent for {}", input);
        }
    }

    #[test]
    fn test_resolve_twice_is_stable_fallback() {
        let programs = vec![flipkart_program(), fallback_program()];

        let once = resolve("https://www.nykaa.com/lipstick?x=1", &programs, None);
        let twice = resolve(&once.url, &programs, None);

        assert_eq!(once.strategy, Strategy::Fallback);
        assert_eq!(twice.url, once.url);
    }

    #[test]
    fn test_redirect_with_hostless_target_is_returned_as_is() {
        let programs = vec![fallback_program()];
        let input = "https://linksredirect.com/?url=garbage";

        let resolved = resolve(input, &programs, None);

        assert_eq!(resolved.url, input);
        assert_eq!(resolved.strategy, Strategy::Unchanged);
        assert!(resolved.program.is_none());
    }

    #[test]
    fn test_redirect_is_not_unwrapped_without_fallback_identifier() {
        let mut fallback = fallback_program();
        fallback.affiliate_id = None;
        let programs = vec![fallback];
        let input = "https://linksredirect.com/?cid=999&url=https%3A%2F%2Fexample.com%2Fa";

        let resolved = resolve(input, &programs, None);

        assert_eq!(resolved.url, input);
        assert_eq!(resolved.strategy, Strategy::Unchanged);
        assert!(resolved.program.is_none());
    }

    #[test]
    fn test_redirect_to_untaggable_target_keeps_input() {
        let mut flipkart = flipkart_program();
        flipkart.affiliate_id = None;
        let programs = vec![flipkart, fallback_program()];
        let input = "https://linksredirect.com/?cid=cid1&source=linkkit&url=https%3A%2F%2Fwww.flipkart.com%2Fitem%2F1";

        let resolved = resolve(input, &programs, None);

        assert_eq!(resolved.url, input);
        assert_eq!(resolved.strategy, Strategy::Unchanged);
    }
}
