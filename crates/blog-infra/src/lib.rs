//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains database, in-memory storage, and mail integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory store and console mail only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `smtp` - SMTP mail delivery via lettre

pub mod database;
pub mod mail;
pub mod memory;

// Re-exports - In-Memory
pub use mail::ConsoleMailer;
pub use memory::InMemoryStore;

#[cfg(feature = "postgres")]
pub use database::{PostgresCommentRepository, PostgresPostRepository};

#[cfg(feature = "smtp")]
pub use mail::{SmtpConfig, SmtpMailer};
