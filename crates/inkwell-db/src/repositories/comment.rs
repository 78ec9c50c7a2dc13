//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use inkwell_core::entities::{Comment, CommentSummary};
use inkwell_core::error::DomainError;
use inkwell_core::traits::{CommentRepository, RepoResult};

use crate::models::{CommentModel, CommentSummaryModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// Shared projection for comment listings
const SUMMARY_SELECT: &str = r"
    SELECT c.id, c.user_id, c.blog_id, c.comment_text, c.created_at, c.updated_at,
           u.username AS author_username, b.title AS blog_title
    FROM comments c
    JOIN users u ON u.id = c.user_id
    JOIN blogs b ON b.id = c.blog_id
";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, user_id, blog_id, comment_text, created_at, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self, blog_ids), fields(blogs = blog_ids.len()))]
    async fn find_by_blogs(&self, blog_ids: &[Uuid]) -> RepoResult<Vec<CommentSummary>> {
        if blog_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!("{SUMMARY_SELECT} WHERE c.blog_id = ANY($1) ORDER BY c.created_at, c.id");
        let rows = sqlx::query_as::<_, CommentSummaryModel>(&sql)
            .bind(blog_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CommentSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<CommentSummary>> {
        let sql = format!("{SUMMARY_SELECT} WHERE c.user_id = $1 ORDER BY c.created_at, c.id");
        let rows = sqlx::query_as::<_, CommentSummaryModel>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CommentSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<CommentSummary>> {
        let sql = format!("{SUMMARY_SELECT} ORDER BY u.username, c.user_id, c.created_at, c.id");
        let rows = sqlx::query_as::<_, CommentSummaryModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CommentSummary::from).collect())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, blog_id = %comment.blog_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, user_id, blog_id, comment_text, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id)
        .bind(comment.user_id)
        .bind(comment.blog_id)
        .bind(&comment.comment_text)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| {
                if constraint.contains("blog_id") {
                    DomainError::BlogNotFound(comment.blog_id)
                } else {
                    DomainError::UserNotFound(comment.user_id)
                }
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments
            SET comment_text = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(comment.id)
        .bind(&comment.comment_text)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }
}
