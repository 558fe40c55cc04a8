//! Outbound email delivery.
//!
//! [`Mailer`] is the delivery seam: [`SmtpMailer`] sends real mail over
//! SMTP, [`LogMailer`] logs instead of sending (demo mode), and
//! [`DisabledMailer`] stands in when no SMTP settings are present in a
//! live deployment. `send` returns `Ok(true)` only when the message was
//! actually handed to a transport; `Ok(false)` means delivery was
//! skipped, which callers record as "not sent".

use async_trait::async_trait;

pub mod smtp;
pub mod template;

pub use smtp::{EmailConfig, SmtpMailer};

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// A fully-rendered message ready for delivery.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Delivery seam. Returns whether the message was actually sent.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<bool, EmailError>;
}

/// Demo-mode mailer: logs the message instead of sending it, and reports
/// success so the demo flow behaves like a configured deployment.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<bool, EmailError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Demo mode: email logged instead of sent"
        );
        Ok(true)
    }
}

/// Stand-in for live deployments with no SMTP configuration. Warns and
/// reports the message as not sent.
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<bool, EmailError> {
        tracing::warn!(
            to = %email.to,
            subject = %email.subject,
            "No email service configured; notification saved but email was NOT sent"
        );
        Ok(false)
    }
}

/// Test mailer that records every message and returns a configured
/// outcome.
#[derive(Default)]
pub struct MemoryMailer {
    sent: std::sync::Mutex<Vec<OutgoingEmail>>,
    fail_delivery: std::sync::atomic::AtomicBool,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `send` calls report delivery failure (`Ok(false)`).
    pub fn set_delivery_failure(&self, fail: bool) {
        self.fail_delivery
            .store(fail, std::sync::atomic::Ordering::SeqCst);
    }

    /// Messages handed to this mailer so far.
    pub fn messages(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<bool, EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(!self.fail_delivery.load(std::sync::atomic::Ordering::SeqCst))
    }
}
