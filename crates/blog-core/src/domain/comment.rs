use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - a reader's comment attached to one post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub active: bool,
}

impl Comment {
    /// Human readable label, e.g. `Comment by Alice on My First Post`.
    pub fn label(&self, post_title: &str) -> String {
        format!("Comment by {} on {}", self.name, post_title)
    }
}

/// A comment that has not been stored yet. New comments are always active.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl NewComment {
    pub fn new(
        post_id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            post_id,
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }
}
