//! # Blog Core
//!
//! The domain layer of the blog.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, ports, pagination and the request-level blog service.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod service;
pub mod slug;

pub use error::{DomainError, RepoError};
pub use service::BlogService;
