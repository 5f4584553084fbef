//! In-memory mailer - keeps every sent message in an outbox.

use async_trait::async_trait;
use tokio::sync::Mutex;

use blog_core::ports::{EmailMessage, MailError, Mailer};

#[derive(Default)]
pub struct InMemoryMailer {
    outbox: Mutex<Vec<EmailMessage>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, oldest first.
    pub async fn outbox(&self) -> Vec<EmailMessage> {
        self.outbox.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        self.outbox.lock().await.push(message);
        Ok(())
    }
}
