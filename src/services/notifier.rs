//! Notification sink interface and SMTP email adapter.

use crate::config::SmtpConfig;
use crate::errors::NotifyError;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

/// Sink accepting subject + body. Failures are reported to the caller but
/// never escalate past the current cycle.
#[async_trait::async_trait]
pub trait NotificationSink {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// SMTP submission with STARTTLS against a fixed relay.
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    /// `timeout` bounds the SMTP conversation so a dead relay cannot hang
    /// the scheduling loop.
    pub fn new(config: &SmtpConfig, timeout: Duration) -> Result<Self, NotifyError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(timeout))
            .build();
        Ok(Self {
            transport,
            from: config.from.parse()?,
            to: config.to.parse()?,
        })
    }
}

#[async_trait::async_trait]
impl NotificationSink for EmailNotifier {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .body(body.to_string())?;
        self.transport.send(message).await?;
        Ok(())
    }
}
