//! Mail transports - SMTP delivery, plus console and in-memory fallbacks.

mod console;
mod memory;

#[cfg(feature = "smtp")]
mod smtp;

pub use console::ConsoleMailer;
pub use memory::InMemoryMailer;

#[cfg(feature = "smtp")]
pub use smtp::{SmtpConfig, SmtpMailer};
