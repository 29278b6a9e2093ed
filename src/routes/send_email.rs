// ============================================================================
// Contact Submission Route
// ============================================================================
//
// POST /api/SendEmailMessage
//
// Accepts the contact form: requires the `authCookie` issued by
// /api/Authenticate, re-derives the caller's origin from the Referrer header
// and holds it against the token's issuer claim, validates the JSON body,
// then hands the submission to the mail transport. The confirmation text is
// echoed back as the plain-text response body.
//
// ============================================================================

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;

use crate::config::{MailSettings, VerifierSettings};
use crate::contact::ContactSubmission;
use crate::context::AppContext;
use crate::error::AppError;
use crate::origin;
use crate::response::formalize;
use crate::token;

pub async fn send_email_message(
    State(context): State<Arc<AppContext>>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    let mail_settings = MailSettings::from_env()?;
    let verifier = VerifierSettings::from_env()?;

    let cookie = token::extract_auth_cookie(&headers)
        .ok_or_else(|| AppError::auth("Auth Cookie not found"))?;
    let claims = token::verify(&cookie, &verifier.secret)?;

    // The issuer claim is held against this request's origin, not the one
    // recorded at issuance time.
    let referrer = origin::from_referrer_header(&headers)?;
    if !claims.iss.eq_ignore_ascii_case(&referrer) {
        return Err(AppError::auth(format!(
            "Token Issuer Value {} does not match {}",
            claims.iss, referrer
        )));
    }

    if !claims.aud.eq_ignore_ascii_case(&verifier.audience) {
        return Err(AppError::auth(format!(
            "Token Audience Value {} does not match {}",
            claims.aud, verifier.audience
        )));
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .ok_or_else(|| AppError::unprocessable("Contact Us message is unreadable"))?
        .to_str()
        .unwrap_or_default();
    if !content_type.trim().is_empty() && !content_type.contains("application/json") {
        return Err(AppError::validation(format!(
            "{content_type} is not allowed"
        )));
    }

    let submission: ContactSubmission = serde_json::from_str(&body)
        .map_err(|_| AppError::unprocessable("Contact Us message is incomplete"))?;
    if !submission.is_complete() {
        return Err(AppError::unprocessable("Contact Us message is incomplete"));
    }

    context.mailer.send(&mail_settings, &submission).await?;

    Ok(formalize(StatusCode::OK, &submission.confirmation()))
}
