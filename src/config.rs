// ============================================================================
// Configuration
// ============================================================================
//
// Settings are read fresh from the environment on every request, so handlers
// never share mutable state. Each endpoint has its own settings struct
// because the two endpoints surface missing values differently: the issuer
// reports a missing secret or audience as a client error and only a missing
// whitelist as a server error, while the send endpoint reports every gap as
// a server error.
//
// ============================================================================

use std::env;

use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 8080;

/// Name of the cookie carrying the claims token.
pub const AUTH_COOKIE_NAME: &str = "authCookie";

/// Validity window of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 3;

const DEV_ENV_VALUE: &str = "Development";

/// Reads a setting, treating blank and whitespace-only values as absent.
fn setting(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

pub fn is_dev_environment() -> bool {
    env::var("AZURE_FUNCTIONS_ENVIRONMENT")
        .map(|value| value == DEV_ENV_VALUE)
        .unwrap_or(false)
}

/// Settings for `POST /api/Authenticate`.
#[derive(Debug)]
pub struct IssuerSettings {
    pub dev: bool,
    pub secret: String,
    pub audience: String,
    /// Comma-split whitelist entries, kept verbatim. Comparison against the
    /// caller's origin is case-insensitive but entries are not trimmed.
    pub whitelist: Vec<String>,
}

impl IssuerSettings {
    pub fn from_env() -> Result<Self, AppError> {
        let secret = setting("JwtSecret")
            .ok_or_else(|| AppError::validation("JwtSecret setting is empty"))?;
        let audience = setting("JwtAudience")
            .ok_or_else(|| AppError::validation("JwtAudience setting is empty"))?;
        let whitelist = setting("DOMAIN_WHITELIST")
            .ok_or_else(|| AppError::config("Domain Whitelist setting is empty"))?;

        Ok(Self {
            dev: is_dev_environment(),
            secret,
            audience,
            whitelist: whitelist.split(',').map(str::to_owned).collect(),
        })
    }
}

/// Token settings for `POST /api/SendEmailMessage`.
#[derive(Debug)]
pub struct VerifierSettings {
    pub secret: String,
    pub audience: String,
}

impl VerifierSettings {
    pub fn from_env() -> Result<Self, AppError> {
        let secret =
            setting("JwtSecret").ok_or_else(|| AppError::config("JWT Secret is empty"))?;
        let audience =
            setting("JwtAudience").ok_or_else(|| AppError::config("JWT Audience is empty"))?;

        Ok(Self { secret, audience })
    }
}

/// SMTP transport settings for `POST /api/SendEmailMessage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub server: String,
    pub port: u16,
    pub ssl: bool,
    pub username: String,
    pub password: String,
    pub email_from: String,
    pub email_to: String,
}

impl MailSettings {
    pub fn from_env() -> Result<Self, AppError> {
        let server = setting("SMTP_SERVER")
            .ok_or_else(|| AppError::config("SMTP Server setting is empty"))?;
        let port = setting("SMTP_SERVER_PORT")
            .ok_or_else(|| AppError::config("SMTP Server Port is empty"))?
            .trim()
            .parse::<u16>()
            .map_err(|_| AppError::config("SMTP Server Port must be a number"))?;
        let ssl = setting("SMTP_SERVER_SSL")
            .ok_or_else(|| AppError::config("SMTP Server SSL is empty"))?;
        let ssl = parse_bool(&ssl)
            .ok_or_else(|| AppError::config("SMTP Server SSL must be true or false"))?;
        let username = setting("SMTP_SERVER_USERNAME")
            .ok_or_else(|| AppError::config("SMTP Server Username is empty"))?;
        let password = setting("SMTP_SERVER_PASSWORD")
            .ok_or_else(|| AppError::config("SMTP Server Password is empty"))?;
        let email_from = setting("SMTP_SERVER_EMAIL_FROM")
            .ok_or_else(|| AppError::config("SMTP Server Email From is empty"))?;
        let email_to = setting("SMTP_SERVER_EMAIL_TO")
            .ok_or_else(|| AppError::config("SMTP Server Email To is empty"))?;

        Ok(Self {
            server,
            port,
            ssl,
            username,
            password,
            email_from,
            email_to,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
