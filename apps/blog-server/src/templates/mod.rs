//! HTML pages rendered with [maud](https://maud.lambda.xyz/).
//!
//! Every dynamic value is escaped by maud.

pub mod comments;
pub mod error;
pub mod layout;
pub mod posts;
pub mod share;
