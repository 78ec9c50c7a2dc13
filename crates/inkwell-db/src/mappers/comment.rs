//! Comment entity <-> model mapper

use inkwell_core::entities::{Comment, CommentSummary};

use crate::models::{CommentModel, CommentSummaryModel};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            user_id: model.user_id,
            blog_id: model.blog_id,
            comment_text: model.comment_text,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommentSummaryModel> for CommentSummary {
    fn from(model: CommentSummaryModel) -> Self {
        CommentSummary {
            comment: model.comment.into(),
            author_username: model.author_username,
            blog_title: model.blog_title,
        }
    }
}
