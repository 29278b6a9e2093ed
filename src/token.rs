// ============================================================================
// Claims Token
// ============================================================================
//
// Stateless signed credential tying a browser back to the origin it was
// issued for. Minted by /api/Authenticate, carried in the `authCookie`
// cookie, verified by /api/SendEmailMessage. Never persisted server-side;
// the validity window lives inside the token itself.
//
// ============================================================================

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{AUTH_COOKIE_NAME, TOKEN_TTL_HOURS};
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Unique id, fresh per issuance.
    pub jti: String,
    pub iat: i64,
    pub nbf: i64,
    /// `iat` + 3 hours.
    pub exp: i64,
    /// The validated origin the token was issued to.
    pub iss: String,
    pub aud: String,
}

/// Mints an HS256 token for the given origin and audience.
pub fn issue(secret: &str, issuer: &str, audience: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        jti: Uuid::new_v4().to_string(),
        iat: now.timestamp(),
        nbf: now.timestamp(),
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        iss: issuer.to_owned(),
        aud: audience.to_owned(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to encode token: {e}")))
}

/// Signature-verifying decode. Expiry and not-before are enforced here as
/// part of the decode; issuer and audience are compared case-insensitively
/// by the caller, so jsonwebtoken's own (case-sensitive) audience check
/// stays off.
pub fn verify(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_nbf = true;
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
        AppError::auth("Unable to decrypt token")
    })
}

/// Cookie string for the issued token: HttpOnly, scoped to `/api/`,
/// strict same-site, secure outside development. No expiry attribute, so
/// the browser drops it with the session.
pub fn build_auth_cookie(token: &str, secure: bool) -> String {
    if secure {
        format!("{AUTH_COOKIE_NAME}={token}; HttpOnly; Path=/api/; SameSite=Strict; Secure")
    } else {
        format!("{AUTH_COOKIE_NAME}={token}; HttpOnly; Path=/api/; SameSite=Strict")
    }
}

/// Pulls the `authCookie` value out of the `Cookie` header, if present.
pub fn extract_auth_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    let prefix = format!("{AUTH_COOKIE_NAME}=");

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(str::to_owned)
}
