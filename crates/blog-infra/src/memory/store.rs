//! In-memory blog store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use blog_core::domain::{Comment, NewComment, NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, CommentRepository, PostRepository};

#[derive(Default)]
struct Tables {
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    last_post_id: i64,
    last_comment_id: i64,
}

impl Tables {
    /// Published posts, newest `publish` first.
    fn published(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.values().filter(|p| p.is_published()).collect();
        posts.sort_by(|a, b| b.publish.cmp(&a.publish).then(b.id.cmp(&a.id)));
        posts
    }
}

/// Posts and comments held in a single lock, so that deleting a post and
/// its comments is one atomic step.
///
/// Data is lost on process restart.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post repository view of this store.
    pub fn posts(&self) -> InMemoryPostRepository {
        InMemoryPostRepository {
            store: self.clone(),
        }
    }

    /// Comment repository view of this store.
    pub fn comments(&self) -> InMemoryCommentRepository {
        InMemoryCommentRepository {
            store: self.clone(),
        }
    }
}

#[derive(Clone)]
pub struct InMemoryPostRepository {
    store: InMemoryStore,
}

#[derive(Clone)]
pub struct InMemoryCommentRepository {
    store: InMemoryStore,
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn update(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        let stored = tables.posts.get_mut(&post.id).ok_or(RepoError::NotFound)?;

        post.created = stored.created;
        post.updated = Utc::now();
        *stored = post.clone();

        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        tables.posts.remove(&id).ok_or(RepoError::NotFound)?;

        let before = tables.comments.len();
        tables.comments.retain(|_, c| c.post_id != id);
        tracing::debug!(
            post_id = id,
            comments_removed = before - tables.comments.len(),
            "Post deleted"
        );

        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        tables.last_post_id += 1;

        let now = Utc::now();
        let post = Post {
            id: tables.last_post_id,
            title: post.title,
            slug: post.slug,
            author_id: post.author_id,
            body: post.body,
            publish: post.publish,
            created: now,
            updated: now,
            status: post.status,
        };
        tables.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn count_published(&self) -> Result<u64, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.published().len() as u64)
    }

    async fn find_published(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .published()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_published_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.get(&id).filter(|p| p.is_published()).cloned())
    }

    async fn find_published_by_date_and_slug(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .published()
            .into_iter()
            .find(|p| p.slug == slug && p.publish_date() == date)
            .cloned())
    }

    async fn find_by_date_and_slug(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .posts
            .values()
            .find(|p| p.slug == slug && p.publish_date() == date)
            .cloned())
    }
}

#[async_trait]
impl BaseRepository<Comment, i64> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.comments.get(&id).cloned())
    }

    async fn update(&self, mut comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.store.tables.write().await;
        if !tables.posts.contains_key(&comment.post_id) {
            return Err(RepoError::Constraint(format!(
                "post {} does not exist",
                comment.post_id
            )));
        }
        let stored = tables
            .comments
            .get_mut(&comment.id)
            .ok_or(RepoError::NotFound)?;

        comment.created = stored.created;
        comment.updated = Utc::now();
        *stored = comment.clone();

        Ok(comment)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        tables.comments.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let mut tables = self.store.tables.write().await;
        if !tables.posts.contains_key(&comment.post_id) {
            return Err(RepoError::Constraint(format!(
                "post {} does not exist",
                comment.post_id
            )));
        }
        tables.last_comment_id += 1;

        let now = Utc::now();
        let comment = Comment {
            id: tables.last_comment_id,
            post_id: comment.post_id,
            name: comment.name,
            email: comment.email,
            body: comment.body,
            created: now,
            updated: now,
            active: true,
        };
        tables.comments.insert(comment.id, comment.clone());

        Ok(comment)
    }

    async fn find_active_by_post(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id && c.active)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(comments)
    }
}
