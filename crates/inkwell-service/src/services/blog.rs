//! Blog service
//!
//! Handles blog listing, creation, update and deletion. Listings attach
//! comments and reaction tallies with a fixed number of batched queries per
//! page, regardless of page size.

use std::collections::HashMap;

use inkwell_common::AppError;
use inkwell_core::entities::{Blog, BlogSummary, ReactionTally, User};
use inkwell_core::traits::BlogQuery;
use inkwell_core::value_objects::TargetKind;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    BlogListQuery, BlogResponse, CommentResponse, CreateBlogRequest, DeleteBlogRequest,
    PageResponse, UpdateBlogRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every blog, newest first
    #[instrument(skip(self, query))]
    pub async fn list_public(&self, query: BlogListQuery) -> ServiceResult<PageResponse<BlogResponse>> {
        self.list(query, None).await
    }

    /// List the caller's own blogs, newest first
    #[instrument(skip(self, query), fields(user_id = %user_id))]
    pub async fn list_mine(
        &self,
        user_id: Uuid,
        query: BlogListQuery,
    ) -> ServiceResult<PageResponse<BlogResponse>> {
        self.list(query, Some(user_id)).await
    }

    /// Create a blog owned by the caller
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn create(&self, user_id: Uuid, request: CreateBlogRequest) -> ServiceResult<BlogResponse> {
        let author = self.author(user_id).await?;

        let blog = Blog::new(user_id, request.title, request.blog_text, request.main_image);
        self.ctx.blog_repo().create(&blog).await?;

        info!(blog_id = %blog.id, "Blog created");

        let tally = ReactionTally::zero(blog.id);
        let summary = BlogSummary {
            blog,
            author_username: author.username,
        };
        Ok(BlogResponse::from_parts(summary, tally, Vec::new()))
    }

    /// Partially update one of the caller's blogs
    #[instrument(skip(self, request), fields(user_id = %user_id, blog_id = %request.blog_id))]
    pub async fn update(&self, user_id: Uuid, request: UpdateBlogRequest) -> ServiceResult<BlogResponse> {
        let mut blog = self.find_blog(request.blog_id).await?;

        if !blog.is_owned_by(user_id) {
            warn!("Blog update rejected: not the author");
            return Err(ServiceError::forbidden(
                "Unauthorized: You can only edit your own blogs",
            ));
        }

        blog.apply_update(request.title, request.blog_text, request.main_image);
        self.ctx.blog_repo().update(&blog).await?;

        info!("Blog updated");

        let author = self.author(user_id).await?;
        let summary = BlogSummary {
            blog,
            author_username: author.username,
        };
        let mut assembled = self.assemble(vec![summary]).await?;
        assembled
            .pop()
            .ok_or_else(|| ServiceError::internal("assembled blog missing"))
    }

    /// Delete one of the caller's blogs along with its comments and reactions
    #[instrument(skip(self, request), fields(user_id = %user_id, blog_id = %request.blog_id))]
    pub async fn delete(&self, user_id: Uuid, request: DeleteBlogRequest) -> ServiceResult<()> {
        let blog = self.find_blog(request.blog_id).await?;

        if !blog.is_owned_by(user_id) {
            warn!("Blog delete rejected: not the author");
            return Err(ServiceError::forbidden(
                "Unauthorized: You can only delete your own blogs",
            ));
        }

        self.ctx.blog_repo().delete(blog.id).await?;

        info!("Blog deleted");

        Ok(())
    }

    async fn list(
        &self,
        query: BlogListQuery,
        author_id: Option<Uuid>,
    ) -> ServiceResult<PageResponse<BlogResponse>> {
        let page = self.ctx.page_request(query.page, query.page_size);
        let search = query
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let (summaries, count) = self
            .ctx
            .blog_repo()
            .list(BlogQuery {
                page,
                search,
                author_id,
            })
            .await?;

        let results = self.assemble(summaries).await?;

        Ok(PageResponse {
            count,
            next: page.next_page(count),
            previous: page.previous_page(),
            results,
        })
    }

    /// Attach comments and reaction tallies to a page of blogs
    async fn assemble(&self, summaries: Vec<BlogSummary>) -> ServiceResult<Vec<BlogResponse>> {
        if summaries.is_empty() {
            return Ok(Vec::new());
        }

        let blog_ids: Vec<Uuid> = summaries.iter().map(|s| s.blog.id).collect();

        let comments = self.ctx.comment_repo().find_by_blogs(&blog_ids).await?;
        let comment_ids: Vec<Uuid> = comments.iter().map(|c| c.comment.id).collect();

        let blog_tallies = self
            .ctx
            .reaction_repo()
            .tally_many(TargetKind::Blog, &blog_ids)
            .await?;
        let comment_tallies = self
            .ctx
            .reaction_repo()
            .tally_many(TargetKind::Comment, &comment_ids)
            .await?;

        let mut by_blog: HashMap<Uuid, Vec<CommentResponse>> = HashMap::new();
        for (comment, tally) in comments.into_iter().zip(comment_tallies) {
            by_blog
                .entry(comment.comment.blog_id)
                .or_default()
                .push(CommentResponse::from((comment, tally)));
        }

        Ok(summaries
            .into_iter()
            .zip(blog_tallies)
            .map(|(summary, tally)| {
                let comments = by_blog.remove(&summary.blog.id).unwrap_or_default();
                BlogResponse::from_parts(summary, tally, comments)
            })
            .collect())
    }

    async fn find_blog(&self, blog_id: Uuid) -> ServiceResult<Blog> {
        self.ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog", blog_id.to_string()))
    }

    /// The caller's account; a token for a deleted user is no longer valid
    async fn author(&self, user_id: Uuid) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))
    }
}
