use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Comment, NewComment, NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard operations on stored entities.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist changes to an existing entity. Refreshes its `updated` stamp.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
///
/// The `*_published` queries form the public view of the blog: they only
/// ever return posts with `PostStatus::Published`, newest `publish` first,
/// and are evaluated against current data on every call.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Store a new post and return it with its assigned id and timestamps.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    async fn count_published(&self) -> Result<u64, RepoError>;

    async fn find_published(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    async fn find_published_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    async fn find_published_by_date_and_slug(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> Result<Option<Post>, RepoError>;

    /// Lookup regardless of status, used to keep slugs unique per publish date.
    async fn find_by_date_and_slug(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> Result<Option<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    /// Store a new, active comment.
    async fn insert(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// Active comments of a post, oldest first.
    async fn find_active_by_post(&self, post_id: i64) -> Result<Vec<Comment>, RepoError>;
}
