// ============================================================================
// Token Issuer Route
// ============================================================================
//
// POST /api/Authenticate
//
// Anonymous endpoint the site calls before showing the contact form. The
// caller's origin (from the Referrer header) must be whitelisted; the answer
// is a short-lived signed token bound to the `authCookie` cookie, with the
// validated origin recorded as the token's issuer. No body expected, none
// returned.
//
// ============================================================================

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Response;

use crate::config::IssuerSettings;
use crate::error::AppError;
use crate::origin;
use crate::response::formalize;
use crate::token;

/// Header whose mere presence is rejected. This is the literal name
/// `ContentType`, not `Content-Type`; the endpoint takes no body and a
/// caller sending this header is not the site's fetch wrapper.
const DISALLOWED_HEADER: &str = "contenttype";

pub async fn authenticate(headers: HeaderMap) -> Result<Response, AppError> {
    let settings = IssuerSettings::from_env()?;

    let referrer = origin::from_referrer_header(&headers)?;
    if !origin::is_whitelisted(&referrer, &settings.whitelist) {
        return Err(AppError::validation(format!(
            "Request is denied as it came from {referrer} and is not in the domain whitelist"
        )));
    }

    if headers.contains_key(DISALLOWED_HEADER) {
        return Err(AppError::validation("ContentType header is not allowed"));
    }

    let token = token::issue(&settings.secret, &referrer, &settings.audience)?;
    let cookie = token::build_auth_cookie(&token, !settings.dev);

    let mut response = formalize(StatusCode::OK, "");
    response
        .headers_mut()
        .insert(SET_COOKIE, HeaderValue::from_str(&cookie)?);

    Ok(response)
}
