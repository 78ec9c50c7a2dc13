//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs,
//! plus the comment groupings used by the listing endpoints.

use std::collections::HashMap;

use inkwell_common::auth::TokenPair;
use inkwell_core::entities::{BlogSummary, CommentSummary, ReactionTally, User};
use uuid::Uuid;

use super::responses::{
    AuthorCommentGroup, AuthoredComment, BlogCommentGroup, BlogResponse, CommentResponse,
    GroupedComment, TokenResponse, UserResponse,
};

// ============================================================================
// Account Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            refresh: pair.refresh_token,
            access: pair.access_token,
        }
    }
}

// ============================================================================
// Blog / Comment Mappers
// ============================================================================

impl From<(CommentSummary, ReactionTally)> for CommentResponse {
    fn from((summary, tally): (CommentSummary, ReactionTally)) -> Self {
        let comment = summary.comment;
        Self {
            uid: comment.id,
            user_id: comment.user_id,
            blog_id: comment.blog_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            comment_text: comment.comment_text,
            commented_by: summary.author_username,
            total_likes: tally.likes,
            total_dislikes: tally.dislikes,
        }
    }
}

impl BlogResponse {
    /// Assemble a blog with its tally and already mapped comments
    pub fn from_parts(summary: BlogSummary, tally: ReactionTally, comments: Vec<CommentResponse>) -> Self {
        let blog = summary.blog;
        Self {
            uid: blog.id,
            user_id: blog.user_id,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
            title: blog.title,
            blog_text: blog.blog_text,
            main_image: blog.main_image,
            created_by: summary.author_username,
            total_likes: tally.likes,
            total_dislikes: tally.dislikes,
            comments,
        }
    }
}

/// Group comments by blog, keeping the order in which blogs first appear.
///
/// `tallies` must be aligned with `comments`.
pub fn group_by_blog(comments: Vec<CommentSummary>, tallies: &[ReactionTally]) -> Vec<BlogCommentGroup> {
    let mut groups: Vec<BlogCommentGroup> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for (summary, tally) in comments.into_iter().zip(tallies) {
        let comment = summary.comment;
        let slot = *index.entry(comment.blog_id).or_insert_with(|| {
            groups.push(BlogCommentGroup {
                blog_id: comment.blog_id,
                title: summary.blog_title,
                user_id: comment.user_id,
                commented_by: summary.author_username,
                comments: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].comments.push(GroupedComment {
            uid: comment.id,
            created_at: comment.created_at,
            comment_text: comment.comment_text,
            likes: tally.likes,
            dislikes: tally.dislikes,
        });
    }

    groups
}

/// Group comments by author, keeping the order in which authors first appear.
///
/// `tallies` must be aligned with `comments`.
pub fn group_by_author(comments: Vec<CommentSummary>, tallies: &[ReactionTally]) -> Vec<AuthorCommentGroup> {
    let mut groups: Vec<AuthorCommentGroup> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for (summary, tally) in comments.into_iter().zip(tallies) {
        let comment = summary.comment;
        let slot = *index.entry(comment.user_id).or_insert_with(|| {
            groups.push(AuthorCommentGroup {
                user_id: comment.user_id,
                commented_by: summary.author_username,
                comments: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].comments.push(AuthoredComment {
            uid: comment.id,
            blog_id: comment.blog_id,
            blog_title: summary.blog_title,
            created_at: comment.created_at,
            comment_text: comment.comment_text,
            likes: tally.likes,
            dislikes: tally.dislikes,
        });
    }

    groups
}
