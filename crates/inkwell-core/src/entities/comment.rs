//! Comment entity - a user's comment on a blog

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub blog_id: Uuid,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(user_id: Uuid, blog_id: Uuid, comment_text: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            blog_id,
            comment_text,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Replace the comment text
    pub fn set_text(&mut self, comment_text: String) {
        self.comment_text = comment_text;
        self.updated_at = Utc::now();
    }
}

/// Comment joined with author username and blog title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSummary {
    pub comment: Comment,
    pub author_username: String,
    pub blog_title: String,
}
