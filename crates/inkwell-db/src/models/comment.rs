//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub blog_id: Uuid,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment row joined with author username and blog title
#[derive(Debug, Clone, FromRow)]
pub struct CommentSummaryModel {
    #[sqlx(flatten)]
    pub comment: CommentModel,
    pub author_username: String,
    pub blog_title: String,
}
