//! # Blog Shared
//!
//! Request payloads shared by the blog's HTTP surface: submission forms,
//! their structural validation, and query parameters.

pub mod forms;

pub use forms::{CommentForm, EmailPostForm, FormErrors, PageQuery};
