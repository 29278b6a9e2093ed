//! Origin-gated contact API.
//!
//! Two anonymous POST endpoints: `/api/Authenticate` checks the caller's
//! origin against a whitelist and answers with a short-lived signed token in
//! an HttpOnly cookie; `/api/SendEmailMessage` verifies that token, validates
//! a contact-form submission, and forwards it over SMTP. Handlers are
//! stateless and re-read their settings from the environment per request.

pub mod config;
pub mod contact;
pub mod context;
pub mod error;
pub mod mailer;
pub mod origin;
pub mod response;
pub mod routes;
pub mod token;
