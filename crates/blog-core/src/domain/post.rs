use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// Maximum length of a post title and slug.
pub const TITLE_MAX_LEN: usize = 250;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    /// Two-letter code used in storage.
    pub fn code(self) -> &'static str {
        match self {
            PostStatus::Draft => "DF",
            PostStatus::Published => "PB",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
        }
    }
}

/// Post entity - represents a blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author_id: i64,
    pub body: String,
    pub publish: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub status: PostStatus,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Calendar day (UTC) the post is published on.
    pub fn publish_date(&self) -> NaiveDate {
        self.publish.date_naive()
    }

    /// Canonical path of the detail page, e.g. `/2023/5/1/my-first-post/`.
    pub fn absolute_path(&self) -> String {
        format!(
            "/{}/{}/{}/{}/",
            self.publish.year(),
            self.publish.month(),
            self.publish.day(),
            self.slug
        )
    }

    /// Canonical absolute URL under the given site base (`https://example.com`).
    pub fn absolute_url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.absolute_path())
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// A post that has not been stored yet.
///
/// The slug defaults to the slugified title and `publish` to the moment of
/// construction; storage assigns the id and the `created`/`updated` stamps.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub author_id: i64,
    pub body: String,
    pub publish: DateTime<Utc>,
    pub status: PostStatus,
}

impl NewPost {
    pub fn new(author_id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            slug: slugify(&title),
            title,
            author_id,
            body: body.into(),
            publish: Utc::now(),
            status: PostStatus::Draft,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_publish(mut self, publish: DateTime<Utc>) -> Self {
        self.publish = publish;
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn publish_date(&self) -> NaiveDate {
        self.publish.date_naive()
    }
}
