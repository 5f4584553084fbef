//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Absolute base used for links in outgoing mail. Derived from the
    /// request when unset.
    pub site_url: Option<String>,
    pub database: Option<DatabaseConfig>,
    pub mail: MailSettings,
}

/// Outgoing mail settings. Without `smtp_host`, mail goes to the log.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub from: String,
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(10),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(1),
        });

        let mail = MailSettings {
            from: env::var("MAIL_FROM").unwrap_or_else(|_| "blog@localhost".to_string()),
            smtp_host: non_empty_var("SMTP_HOST"),
            smtp_port: parse_var("SMTP_PORT").unwrap_or(587),
            smtp_username: non_empty_var("SMTP_USERNAME"),
            smtp_password: non_empty_var("SMTP_PASSWORD"),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            site_url: non_empty_var("SITE_URL").map(|url| url.trim_end_matches('/').to_string()),
            database,
            mail,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
