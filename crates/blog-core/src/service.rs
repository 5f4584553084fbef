//! Blog service - the request-level operations of the blog, independent of HTTP.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::instrument;

use crate::domain::{Comment, NewComment, NewPost, Post, PostStatus, TITLE_MAX_LEN};
use crate::error::DomainError;
use crate::pagination::{POSTS_PER_PAGE, Page, Paginator};
use crate::ports::{CommentRepository, EmailMessage, Mailer, PostRepository};
use crate::slug::is_valid_slug;

/// A published post together with its visible comments.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// What a reader submits when recommending a post by email.
#[derive(Debug, Clone)]
pub struct ShareRequest {
    pub name: String,
    pub email: String,
    pub to: String,
    pub comments: Option<String>,
}

/// Compose the recommendation email for `post`, reachable at `post_url`.
pub fn compose_share_email(post: &Post, share: &ShareRequest, post_url: &str) -> EmailMessage {
    let comments = share.comments.as_deref().unwrap_or_default();
    EmailMessage {
        to: share.to.clone(),
        reply_to: Some(share.email.clone()),
        subject: format!("{} recommends you read {}", share.name, post.title),
        body: format!(
            "Read {} at {}\n\n{}'s comments: {}",
            post.title, post_url, share.name, comments
        ),
    }
}

#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    mailer: Arc<dyn Mailer>,
}

impl BlogService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            posts,
            comments,
            mailer,
        }
    }

    /// One page of the published listing. See [`Paginator::resolve`] for how
    /// the raw page parameter is interpreted.
    pub async fn published_page(&self, raw_page: Option<&str>) -> Result<Page<Post>, DomainError> {
        let total = self.posts.count_published().await?;
        let window = Paginator::new(total, POSTS_PER_PAGE).resolve(raw_page);
        let items = if window.limit == 0 {
            Vec::new()
        } else {
            self.posts.find_published(window.offset, window.limit).await?
        };

        tracing::debug!(
            page = window.number,
            num_pages = window.num_pages,
            count = items.len(),
            "published page loaded"
        );
        Ok(Page { items, window })
    }

    pub async fn published_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_published_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Published post addressed by its publish date and slug, with its active comments.
    pub async fn post_detail(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> Result<PostDetail, DomainError> {
        let key = || format!("{year}/{month}/{day}/{slug}");
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DomainError::post_not_found(key()))?;

        let post = self
            .posts
            .find_published_by_date_and_slug(date, slug)
            .await?
            .ok_or_else(|| DomainError::post_not_found(key()))?;
        let comments = self.comments.find_active_by_post(post.id).await?;

        Ok(PostDetail { post, comments })
    }

    #[instrument(skip_all, fields(post_id = post.id))]
    pub async fn add_comment(
        &self,
        post: &Post,
        name: String,
        email: String,
        body: String,
    ) -> Result<Comment, DomainError> {
        let comment = self
            .comments
            .insert(NewComment::new(post.id, name, email, body))
            .await?;
        tracing::info!(comment_id = comment.id, "{}", comment.label(&post.title));
        Ok(comment)
    }

    /// Email a recommendation of `post` to `share.to`. A single delivery attempt is made.
    #[instrument(skip(self, post, share), fields(post_id = post.id))]
    pub async fn share_post(
        &self,
        post: &Post,
        share: &ShareRequest,
        post_url: &str,
    ) -> Result<(), DomainError> {
        let message = compose_share_email(post, share, post_url);
        self.mailer.send(message).await?;
        tracing::info!("post recommendation sent");
        Ok(())
    }

    #[instrument(skip(self, post), fields(title = %post.title))]
    pub async fn create_post(&self, post: NewPost) -> Result<Post, DomainError> {
        validate_post_fields(&post.title, &post.slug)?;
        self.ensure_unique_slug(post.publish_date(), &post.slug, None).await?;

        let post = self.posts.insert(post).await?;
        tracing::info!(post_id = post.id, status = post.status.label(), "post created");
        Ok(post)
    }

    #[instrument(skip(self, post), fields(post_id = post.id))]
    pub async fn update_post(&self, post: Post) -> Result<Post, DomainError> {
        validate_post_fields(&post.title, &post.slug)?;
        self.ensure_unique_slug(post.publish_date(), &post.slug, Some(post.id))
            .await?;

        let post = self.posts.update(post).await?;
        tracing::info!(status = post.status.label(), "post updated");
        Ok(post)
    }

    pub async fn publish_post(&self, id: i64) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;
        post.status = PostStatus::Published;
        self.update_post(post).await
    }

    /// Delete a post. Its comments are removed with it.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        self.posts.delete(id).await.map_err(|e| match e {
            crate::RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })?;
        tracing::info!("post deleted");
        Ok(())
    }

    /// Moderation toggle: inactive comments are hidden from readers.
    #[instrument(skip(self))]
    pub async fn set_comment_active(&self, id: i64, active: bool) -> Result<Comment, DomainError> {
        let mut comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::comment_not_found(id))?;
        comment.active = active;
        Ok(self.comments.update(comment).await?)
    }

    async fn ensure_unique_slug(
        &self,
        date: NaiveDate,
        slug: &str,
        except: Option<i64>,
    ) -> Result<(), DomainError> {
        match self.posts.find_by_date_and_slug(date, slug).await? {
            Some(existing) if Some(existing.id) != except => Err(DomainError::Duplicate(format!(
                "slug '{slug}' is already used on {date}"
            ))),
            _ => Ok(()),
        }
    }
}

fn validate_post_fields(title: &str, slug: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    if title.chars().count() > TITLE_MAX_LEN || slug.len() > TITLE_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "title and slug are limited to {TITLE_MAX_LEN} characters"
        )));
    }
    if !is_valid_slug(slug) {
        return Err(DomainError::Validation(format!("invalid slug '{slug}'")));
    }
    Ok(())
}
