//! Reaction service
//!
//! Toggles a user's reaction on a blog or comment and reports the new like
//! count. The read-modify-write happens atomically in the repository.

use inkwell_common::AppError;
use inkwell_core::value_objects::ReactionTarget;
use inkwell_core::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{BlogReactionRequest, CommentReactionRequest, ToggleReactionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the caller's reaction on a blog
    #[instrument(skip(self, request), fields(user_id = %user_id, blog_id = %request.blog_id))]
    pub async fn toggle_blog(
        &self,
        user_id: Uuid,
        request: BlogReactionRequest,
    ) -> ServiceResult<ToggleReactionResponse> {
        self.toggle(user_id, ReactionTarget::blog(request.blog_id), "Blog like status updated")
            .await
    }

    /// Toggle the caller's reaction on a comment
    #[instrument(skip(self, request), fields(user_id = %user_id, comment_id = %request.comment_id))]
    pub async fn toggle_comment(
        &self,
        user_id: Uuid,
        request: CommentReactionRequest,
    ) -> ServiceResult<ToggleReactionResponse> {
        self.toggle(
            user_id,
            ReactionTarget::comment(request.comment_id),
            "Comment like status updated",
        )
        .await
    }

    async fn toggle(
        &self,
        user_id: Uuid,
        target: ReactionTarget,
        message: &str,
    ) -> ServiceResult<ToggleReactionResponse> {
        let outcome = self
            .ctx
            .reaction_repo()
            .toggle(user_id, target)
            .await
            .map_err(|e| match e {
                // The token outlived its account
                DomainError::UserNotFound(_) => {
                    warn!("Reaction toggle by unknown user");
                    ServiceError::App(AppError::InvalidToken)
                }
                other => ServiceError::from(other),
            })?;

        info!(
            status = %outcome.status,
            like_count = outcome.tally.likes,
            "Reaction status updated"
        );

        Ok(ToggleReactionResponse {
            message: message.to_string(),
            like_count: outcome.tally.likes,
            status: outcome.status,
        })
    }
}
