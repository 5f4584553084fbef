//! SMTP mail delivery via lettre.

use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use blog_core::ports::{EmailMessage, MailError, Mailer};

/// SMTP relay settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender address of every outgoing message.
    pub from: String,
}

/// Mailer sending through an SMTP relay with STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.from)?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.port);
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        tracing::info!(host = %config.host, port = config.port, "SMTP mailer configured");
        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_message(&self, message: EmailMessage) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&message.to)?)
            .subject(message.subject)
            .header(ContentType::TEXT_PLAIN);
        if let Some(reply_to) = message.reply_to.as_deref() {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        builder
            .body(message.body)
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MailError::Address(format!("{address}: {e}")))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        let to = message.to.clone();
        let email = self.build_message(message)?;

        self.transport.send(email).await.map_err(|e| {
            tracing::error!(error = %e, "SMTP delivery failed");
            MailError::Transport(e.to_string())
        })?;

        tracing::info!(to = %to, "Email sent");
        Ok(())
    }
}
