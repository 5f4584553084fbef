//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::BlogService;
use blog_core::ports::{CommentRepository, Mailer, PostRepository};
use blog_infra::database::DatabaseConfig;
use blog_infra::{ConsoleMailer, InMemoryStore};

#[cfg(feature = "postgres")]
use blog_infra::database::{PostgresCommentRepository, PostgresPostRepository, connect};

#[cfg(feature = "smtp")]
use blog_infra::{SmtpConfig, SmtpMailer};

use crate::config::{AppConfig, MailSettings};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub site_url: Option<String>,
}

type Repositories = (Arc<dyn PostRepository>, Arc<dyn CommentRepository>);

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (posts, comments) = repositories(config.database.as_ref()).await;
        let mailer = mailer(&config.mail);

        tracing::info!("Application state initialized");

        Self {
            blog: BlogService::new(posts, comments, mailer),
            site_url: config.site_url.clone(),
        }
    }
}

fn in_memory() -> Repositories {
    let store = InMemoryStore::new();
    (Arc::new(store.posts()), Arc::new(store.comments()))
}

#[cfg(feature = "postgres")]
async fn repositories(db_config: Option<&DatabaseConfig>) -> Repositories {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory();
    };

    match connect(config).await {
        Ok(conn) => (
            Arc::new(PostgresPostRepository::new(conn.clone())),
            Arc::new(PostgresCommentRepository::new(conn)),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database. Using in-memory fallback.");
            in_memory()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn repositories(_db_config: Option<&DatabaseConfig>) -> Repositories {
    tracing::info!("Running without postgres feature - using in-memory store");
    in_memory()
}

#[cfg(feature = "smtp")]
fn mailer(settings: &MailSettings) -> Arc<dyn Mailer> {
    let Some(host) = &settings.smtp_host else {
        tracing::warn!("SMTP_HOST not set. Outgoing mail is written to the log.");
        return Arc::new(ConsoleMailer::new(&settings.from));
    };

    let config = SmtpConfig {
        host: host.clone(),
        port: settings.smtp_port,
        username: settings.smtp_username.clone(),
        password: settings.smtp_password.clone(),
        from: settings.from.clone(),
    };
    match SmtpMailer::new(&config) {
        Ok(mailer) => Arc::new(mailer),
        Err(e) => {
            tracing::error!(error = %e, "Invalid SMTP configuration. Using console mailer.");
            Arc::new(ConsoleMailer::new(&settings.from))
        }
    }
}

#[cfg(not(feature = "smtp"))]
fn mailer(settings: &MailSettings) -> Arc<dyn Mailer> {
    tracing::info!("Running without smtp feature - outgoing mail is written to the log");
    Arc::new(ConsoleMailer::new(&settings.from))
}
