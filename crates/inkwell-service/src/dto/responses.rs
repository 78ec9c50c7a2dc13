//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use inkwell_core::value_objects::ReactionStatus;
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Message plus payload, the envelope used by mutating endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Bare message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Page-number pagination envelope
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    /// Total matching items across all pages
    pub count: i64,
    /// Next page number, or null on the last page
    pub next: Option<u32>,
    /// Previous page number, or null on the first page
    pub previous: Option<u32>,
    pub results: Vec<T>,
}

// ============================================================================
// Account Responses
// ============================================================================

/// Public user representation
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

/// Access and refresh token pair
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub refresh: String,
    pub access: String,
}

/// Login payload
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: TokenResponse,
}

// ============================================================================
// Blog Responses
// ============================================================================

/// Blog with author, counts and comments
#[derive(Debug, Clone, Serialize)]
pub struct BlogResponse {
    pub uid: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub blog_text: String,
    pub main_image: Option<String>,
    pub created_by: String,
    pub total_likes: i64,
    pub total_dislikes: i64,
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment with author and counts
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub uid: Uuid,
    pub user_id: Uuid,
    pub blog_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comment_text: String,
    pub commented_by: String,
    pub total_likes: i64,
    pub total_dislikes: i64,
}

/// Comment entry inside a [`BlogCommentGroup`]
#[derive(Debug, Clone, Serialize)]
pub struct GroupedComment {
    pub uid: Uuid,
    pub created_at: DateTime<Utc>,
    pub comment_text: String,
    pub likes: i64,
    pub dislikes: i64,
}

/// One user's comments on one blog
#[derive(Debug, Clone, Serialize)]
pub struct BlogCommentGroup {
    pub blog_id: Uuid,
    pub title: String,
    pub user_id: Uuid,
    pub commented_by: String,
    pub comments: Vec<GroupedComment>,
}

/// Comment entry inside an [`AuthorCommentGroup`]
#[derive(Debug, Clone, Serialize)]
pub struct AuthoredComment {
    pub uid: Uuid,
    pub blog_id: Uuid,
    pub blog_title: String,
    pub created_at: DateTime<Utc>,
    pub comment_text: String,
    pub likes: i64,
    pub dislikes: i64,
}

/// All comments written by one user
#[derive(Debug, Clone, Serialize)]
pub struct AuthorCommentGroup {
    pub user_id: Uuid,
    pub commented_by: String,
    pub comments: Vec<AuthoredComment>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Result of a reaction toggle
#[derive(Debug, Clone, Serialize)]
pub struct ToggleReactionResponse {
    pub message: String,
    /// Likes on the target after the toggle
    pub like_count: i64,
    /// Caller's status after the toggle
    pub status: ReactionStatus,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

/// Individual dependency checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}

impl ReadinessResponse {
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.database { "ready" } else { "not_ready" };
        Self {
            status: status.to_string(),
            checks,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.checks.database
    }
}
