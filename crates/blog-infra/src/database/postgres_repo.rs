//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use blog_core::domain::{Comment, NewComment, NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::{CommentRepository, PostRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// Published posts, newest first.
pub(super) fn published() -> Select<PostEntity> {
    PostEntity::find()
        .filter(post::Column::Status.eq(post::Status::Published))
        .order_by_desc(post::Column::Publish)
        .order_by_desc(post::Column::Id)
}

/// `[start, end)` of a UTC calendar day.
fn day_bounds(date: NaiveDate) -> (DateTimeWithTimeZone, DateTimeWithTimeZone) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1);
    (start.into(), end.into())
}

pub(super) fn on_day_with_slug(select: Select<PostEntity>, date: NaiveDate, slug: &str) -> Select<PostEntity> {
    let (start, end) = day_bounds(date);
    select
        .filter(post::Column::Slug.eq(slug))
        .filter(post::Column::Publish.gte(start))
        .filter(post::Column::Publish.lt(end))
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(post_id = model.id, slug = %model.slug, "Post inserted");
        Ok(model.into())
    }

    async fn count_published(&self) -> Result<u64, RepoError> {
        published().count(&self.db).await.map_err(repo_error)
    }

    async fn find_published(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let result = published()
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_published_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let result = published()
            .filter(post::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_published_by_date_and_slug(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> Result<Option<Post>, RepoError> {
        tracing::debug!(%date, slug, "Finding published post by date and slug");

        let result = on_day_with_slug(published(), date, slug)
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_date_and_slug(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> Result<Option<Post>, RepoError> {
        let result = on_day_with_slug(PostEntity::find(), date, slug)
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(comment)
            .insert(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(comment_id = model.id, post_id = model.post_id, "Comment inserted");
        Ok(model.into())
    }

    async fn find_active_by_post(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .filter(comment::Column::Active.eq(true))
            .order_by_asc(comment::Column::Created)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
