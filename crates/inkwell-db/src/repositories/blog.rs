//! PostgreSQL implementation of BlogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use inkwell_core::entities::{Blog, BlogSummary};
use inkwell_core::error::DomainError;
use inkwell_core::traits::{BlogQuery, BlogRepository, RepoResult};

use crate::models::{BlogModel, BlogSummaryModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of BlogRepository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    /// Create a new PgBlogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build an ILIKE pattern matching `term` anywhere, with wildcards escaped
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(
            r"
            SELECT id, user_id, title, blog_text, main_image, created_at, updated_at
            FROM blogs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: BlogQuery) -> RepoResult<(Vec<BlogSummary>, i64)> {
        let pattern = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(contains_pattern);

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM blogs b
            WHERE ($1::uuid IS NULL OR b.user_id = $1)
              AND ($2::text IS NULL OR b.title ILIKE $2 OR b.blog_text ILIKE $2)
            ",
        )
        .bind(query.author_id)
        .bind(pattern.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, BlogSummaryModel>(
            r"
            SELECT b.id, b.user_id, b.title, b.blog_text, b.main_image, b.created_at, b.updated_at,
                   u.username AS author_username
            FROM blogs b
            JOIN users u ON u.id = b.user_id
            WHERE ($1::uuid IS NULL OR b.user_id = $1)
              AND ($2::text IS NULL OR b.title ILIKE $2 OR b.blog_text ILIKE $2)
            ORDER BY b.created_at DESC, b.id
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(query.author_id)
        .bind(pattern.as_deref())
        .bind(query.page.limit())
        .bind(query.page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(BlogSummary::from).collect(), total))
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id, user_id = %blog.user_id))]
    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO blogs (id, user_id, title, blog_text, main_image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(blog.id)
        .bind(blog.user_id)
        .bind(&blog.title)
        .bind(&blog.blog_text)
        .bind(&blog.main_image)
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, |_| DomainError::UserNotFound(blog.user_id)))?;

        Ok(())
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn update(&self, blog: &Blog) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE blogs
            SET title = $2, blog_text = $3, main_image = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(blog.id)
        .bind(&blog.title)
        .bind(&blog.blog_text)
        .bind(&blog.main_image)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BlogNotFound(blog.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        // Comments and reactions go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BlogNotFound(id));
        }

        Ok(())
    }
}
