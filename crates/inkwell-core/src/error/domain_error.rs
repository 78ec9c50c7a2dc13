//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::ReactionTarget;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Blog not found: {0}")]
    BlogNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction status code: {0}")]
    InvalidReactionStatus(i16),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You can only modify your own blogs")]
    NotBlogAuthor,

    #[error("You can only modify your own comments")]
    NotCommentAuthor,

    #[error("User account is disabled")]
    AccountDisabled,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("username is already taken")]
    UsernameTaken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Not-found error for a reaction target
    pub fn target_not_found(target: ReactionTarget) -> Self {
        match target.kind {
            crate::value_objects::TargetKind::Blog => Self::BlogNotFound(target.id),
            crate::value_objects::TargetKind::Comment => Self::CommentNotFound(target.id),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BlogNotFound(_) => "UNKNOWN_BLOG",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionStatus(_) => "INVALID_REACTION_STATUS",

            // Authorization
            Self::NotBlogAuthor => "NOT_BLOG_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::AccountDisabled => "ACCOUNT_DISABLED",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::BlogNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotBlogAuthor | Self::NotCommentAuthor | Self::AccountDisabled
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken)
    }
}
