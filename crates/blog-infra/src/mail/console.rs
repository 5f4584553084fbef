//! Console mailer - writes outgoing mail to the log instead of sending it.

use async_trait::async_trait;

use blog_core::ports::{EmailMessage, MailError, Mailer};

/// Development mailer used when no SMTP server is configured.
pub struct ConsoleMailer {
    from: String,
}

impl ConsoleMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        tracing::info!(
            from = %self.from,
            to = %message.to,
            reply_to = message.reply_to.as_deref().unwrap_or("-"),
            subject = %message.subject,
            body = %message.body,
            "Email (console backend)"
        );
        Ok(())
    }
}
