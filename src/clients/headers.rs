//! Request header composition.
//!
//! Every Storefront request carries the client's default headers, then
//! `Content-Type: application/json`, then whatever the caller passed. Later
//! layers win, and header names are matched case-insensitively, so a caller
//! overriding `content-type` replaces the default rather than duplicating it.

use std::collections::HashMap;

/// Header forwarding the shopper's IP to the Storefront API.
///
/// Without it, every request appears to come from the server, and Shopify's
/// bot protection throttles the whole storefront as one buyer.
pub const BUYER_IP_HEADER: &str = "Shopify-Storefront-Buyer-IP";

/// Builds the per-request headers for a shopper.
///
/// Returns a single [`BUYER_IP_HEADER`] entry when `caller_ip` is a
/// non-blank string, and an empty map otherwise.
///
/// ```rust
/// use storefront_bff::build_headers;
///
/// let headers = build_headers(Some("203.0.113.7"));
/// assert_eq!(headers["Shopify-Storefront-Buyer-IP"], "203.0.113.7");
/// assert!(build_headers(None).is_empty());
/// assert!(build_headers(Some("")).is_empty());
/// ```
#[must_use]
pub fn build_headers(caller_ip: Option<&str>) -> HashMap<String, String> {
    caller_ip
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(|ip| HashMap::from([(BUYER_IP_HEADER.to_string(), ip.to_string())]))
        .unwrap_or_default()
}

/// Layers `overrides` on top of `base`.
///
/// An override replaces any base entry with the same name regardless of
/// case; the override's spelling of the name is kept.
#[must_use]
pub fn merge_headers(
    base: &HashMap<String, String>,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged: HashMap<String, String> = base
        .iter()
        .filter(|(name, _)| {
            !overrides
                .keys()
                .any(|key| key.eq_ignore_ascii_case(name))
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Per-request headers: `Content-Type: application/json` unless the caller
/// overrides it, plus every override.
#[must_use]
pub fn request_headers(overrides: &HashMap<String, String>) -> HashMap<String, String> {
    let defaults = HashMap::from([("Content-Type".to_string(), "application/json".to_string())]);
    merge_headers(&defaults, overrides)
}
