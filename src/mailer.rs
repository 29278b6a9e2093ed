//! Outbound mail transport.
//!
//! The send endpoint talks to the [`Mailer`] trait only; tests substitute a
//! recording implementation through the same seam.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailSettings;
use crate::contact::ContactSubmission;
use crate::error::AppError;

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers a validated submission using the given transport settings.
    async fn send(
        &self,
        settings: &MailSettings,
        submission: &ContactSubmission,
    ) -> Result<(), AppError>;
}

/// SMTP delivery via lettre: TLS relay when `SMTP_SERVER_SSL` is true, plain
/// connection otherwise. A transport is built per send; settings can change
/// between requests without a restart.
pub struct SmtpMailer;

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(
        &self,
        settings: &MailSettings,
        submission: &ContactSubmission,
    ) -> Result<(), AppError> {
        let email = Message::builder()
            .from(
                settings
                    .email_from
                    .parse()
                    .map_err(|e| AppError::Mail(format!("invalid from address: {e}")))?,
            )
            .to(settings
                .email_to
                .parse()
                .map_err(|e| AppError::Mail(format!("invalid to address: {e}")))?)
            .subject(format!("Contact form enquiry from {}", submission.name))
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Name: {}\nEmail: {}\n\n{}\n",
                submission.name, submission.email, submission.enquiry
            ))
            .map_err(|e| AppError::Mail(format!("failed to build message: {e}")))?;

        let builder = if settings.ssl {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.server)
                .map_err(|e| AppError::Mail(format!("invalid SMTP relay: {e}")))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.server)
        };

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        transport
            .send(email)
            .await
            .map_err(|e| AppError::Mail(format!("SMTP send failed: {e}")))?;

        Ok(())
    }
}
