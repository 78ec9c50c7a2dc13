//! Comment service
//!
//! Handles comment creation, editing, deletion and the grouped listings.

use inkwell_common::AppError;
use inkwell_core::entities::{Comment, CommentSummary, ReactionTally, User};
use inkwell_core::value_objects::{ReactionTarget, TargetKind};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    group_by_author, group_by_blog, AuthorCommentGroup, BlogCommentGroup, CommentResponse,
    CreateCommentRequest, DeleteCommentRequest, UpdateCommentRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's comments, grouped by the blog they were left on
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn list_mine(&self, user_id: Uuid) -> ServiceResult<Vec<BlogCommentGroup>> {
        let comments = self.ctx.comment_repo().find_by_user(user_id).await?;
        let tallies = self.tallies(&comments).await?;
        Ok(group_by_blog(comments, &tallies))
    }

    /// Every comment, grouped by author
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<AuthorCommentGroup>> {
        let comments = self.ctx.comment_repo().find_all().await?;
        let tallies = self.tallies(&comments).await?;
        Ok(group_by_author(comments, &tallies))
    }

    /// Comment on a blog
    #[instrument(skip(self, request), fields(user_id = %user_id, blog_id = %request.blog_id))]
    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let author = self.author(user_id).await?;

        let blog = self
            .ctx
            .blog_repo()
            .find_by_id(request.blog_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog", request.blog_id.to_string()))?;

        let comment = Comment::new(user_id, blog.id, request.comment_text);
        // The blog can still vanish before the insert; the foreign key
        // reports that as BlogNotFound
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, "Comment created");

        let tally = ReactionTally::zero(comment.id);
        Ok(Self::response(comment, author, tally))
    }

    /// Edit one of the caller's comments
    #[instrument(skip(self, request), fields(user_id = %user_id, comment_id = %request.comment_id))]
    pub async fn update(
        &self,
        user_id: Uuid,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.find_comment(request.comment_id).await?;

        if !comment.is_owned_by(user_id) {
            warn!("Comment update rejected: not the author");
            return Err(ServiceError::forbidden(
                "Unauthorized: You can only edit your own comments",
            ));
        }

        comment.set_text(request.comment_text);
        self.ctx.comment_repo().update(&comment).await?;

        info!("Comment updated");

        let author = self.author(user_id).await?;
        let tally = self
            .ctx
            .reaction_repo()
            .tally(ReactionTarget::comment(comment.id))
            .await?;

        Ok(Self::response(comment, author, tally))
    }

    /// Delete one of the caller's comments along with its reactions
    #[instrument(skip(self, request), fields(user_id = %user_id, comment_id = %request.comment_id))]
    pub async fn delete(&self, user_id: Uuid, request: DeleteCommentRequest) -> ServiceResult<()> {
        let comment = self.find_comment(request.comment_id).await?;

        if !comment.is_owned_by(user_id) {
            warn!("Comment delete rejected: not the author");
            return Err(ServiceError::forbidden(
                "Unauthorized: You can only delete your own comments",
            ));
        }

        self.ctx.comment_repo().delete(comment.id).await?;

        info!("Comment deleted");

        Ok(())
    }

    /// One batched tally query for a whole listing, aligned with `comments`
    async fn tallies(
        &self,
        comments: &[CommentSummary],
    ) -> ServiceResult<Vec<ReactionTally>> {
        let ids: Vec<Uuid> = comments.iter().map(|c| c.comment.id).collect();
        Ok(self
            .ctx
            .reaction_repo()
            .tally_many(TargetKind::Comment, &ids)
            .await?)
    }

    async fn find_comment(&self, comment_id: Uuid) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))
    }

    async fn author(&self, user_id: Uuid) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))
    }

    fn response(comment: Comment, author: User, tally: ReactionTally) -> CommentResponse {
        let summary = CommentSummary {
            comment,
            author_username: author.username,
            blog_title: String::new(),
        };
        CommentResponse::from((summary, tally))
    }
}
