//! Reaction database models
//!
//! Both `blog_reactions` and `comment_reactions` select into the same shape;
//! queries alias the target column to `target_id`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a reaction row
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: Uuid,
    pub target_id: Uuid,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated like/dislike counts (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionTallyModel {
    pub target_id: Uuid,
    pub likes: i64,
    pub dislikes: i64,
}
