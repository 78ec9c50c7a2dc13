//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Account Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 150, message = "First name must be at most 150 characters"))]
    #[serde(default)]
    pub first_name: String,

    #[validate(length(max = 150, message = "Last name must be at most 150 characters"))]
    #[serde(default)]
    pub last_name: String,

    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh: String,
}

// ============================================================================
// Blog Requests
// ============================================================================

/// Create blog request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, max = 500, message = "Title must be 1-500 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Blog text is required"))]
    pub blog_text: String,

    /// Image path or URL
    #[validate(length(max = 2048, message = "Image reference must be at most 2048 characters"))]
    pub main_image: Option<String>,
}

/// Partial blog update; the target is named in the body
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    pub blog_id: Uuid,

    #[validate(length(min = 1, max = 500, message = "Title must be 1-500 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Blog text cannot be empty"))]
    pub blog_text: Option<String>,

    #[validate(length(max = 2048, message = "Image reference must be at most 2048 characters"))]
    pub main_image: Option<String>,
}

/// Delete blog request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteBlogRequest {
    pub blog_id: Uuid,
}

/// Blog listing filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Case-insensitive substring over title and body
    pub search: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub blog_id: Uuid,

    #[validate(length(min = 1, max = 5000, message = "Comment must be 1-5000 characters"))]
    pub comment_text: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    pub comment_id: Uuid,

    #[validate(length(min = 1, max = 5000, message = "Comment must be 1-5000 characters"))]
    pub comment_text: String,
}

/// Delete comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteCommentRequest {
    pub comment_id: Uuid,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Toggle the caller's reaction on a blog
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BlogReactionRequest {
    pub blog_id: Uuid,
}

/// Toggle the caller's reaction on a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentReactionRequest {
    pub comment_id: Uuid,
}
