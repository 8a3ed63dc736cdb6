//! Mail Module
//!
//! Outgoing mail delivery. Verification emails are the only mail sent.
//!
//! # Implementations
//!
//! - **`SmtpMailer`** - Sends through an SMTP relay with `lettre`
//! - **`LogMailer`** - Logs the message instead of sending it; used when no
//!   relay is configured
//!
//! Delivery is fire-and-forget from the caller's point of view: callers
//! only learn whether it worked.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::shared::SmtpConfig;

/// Mail errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address: {0}")]
    Address(String),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError>;
}

/// Logs outgoing mail
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        tracing::info!("Mail to {} ({}): {}", to, subject, html);
        Ok(())
    }
}

pub struct SmtpMailer {
    from: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(from: impl Into<String>, smtp: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
            .credentials(Credentials::new(smtp.username.clone(), smtp.password.clone()))
            .build();
        Ok(Self {
            from: from.into(),
            transport,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.parse().map_err(|e| MailError::Address(format!("{}: {}", self.from, e)))?)
            .to(to.parse().map_err(|e| MailError::Address(format!("{}: {}", to, e)))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())?;

        self.transport.send(message).await?;
        tracing::info!("Sent '{}' to {}", subject, to);
        Ok(())
    }
}
