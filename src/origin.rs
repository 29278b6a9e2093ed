//! Caller-origin extraction and whitelist membership.
//!
//! The origin is the lower-cased `scheme://host[:port]` portion of the
//! `Referrer` header. Both endpoints trust it only after this module has
//! produced it: the issuer checks it against the whitelist, the verifier
//! compares it against the token's issuer claim.

use axum::http::HeaderMap;

use crate::error::AppError;

/// Header carrying the caller's page URL. The site's fetch wrapper sets
/// `Referrer` explicitly; the standard `Referer` header is not consulted.
const REFERRER_HEADER: &str = "referrer";

/// Extracts the caller's origin from the `Referrer` header. An absent or
/// unparseable header is a client error.
pub fn from_referrer_header(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get(REFERRER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(authority)
        .ok_or_else(|| AppError::validation("Referrer header was not supplied"))
}

/// Lower-cased `scheme://host[:port]` portion of a URL. A value without a
/// scheme separator is treated as plain http.
fn authority(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) if !scheme.is_empty() => (scheme, rest),
        Some(_) => return None,
        None => ("http", url),
    };

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() {
        return None;
    }

    Some(format!("{scheme}://{host}").to_ascii_lowercase())
}

/// Case-insensitive exact match against the whitelist. Entries are compared
/// verbatim; a stray space in the configured list will not match.
pub fn is_whitelisted(origin: &str, whitelist: &[String]) -> bool {
    whitelist.iter().any(|domain| domain.eq_ignore_ascii_case(origin))
}
