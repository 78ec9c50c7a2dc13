//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    BlogListQuery, BlogReactionRequest, CommentReactionRequest, CreateBlogRequest,
    CreateCommentRequest, DeleteBlogRequest, DeleteCommentRequest, LoginRequest,
    RefreshTokenRequest, RegisterRequest, UpdateBlogRequest, UpdateCommentRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AuthorCommentGroup, AuthoredComment, BlogCommentGroup, BlogResponse,
    CommentResponse, GroupedComment, HealthChecks, HealthResponse, LoginResponse,
    MessageResponse, PageResponse, ReadinessResponse, ToggleReactionResponse, TokenResponse,
    UserResponse,
};

pub use mappers::{group_by_author, group_by_blog};
