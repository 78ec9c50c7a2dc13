//! Blog database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for blogs table
#[derive(Debug, Clone, FromRow)]
pub struct BlogModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub blog_text: String,
    pub main_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Blog row joined with its author (from listing query)
#[derive(Debug, Clone, FromRow)]
pub struct BlogSummaryModel {
    #[sqlx(flatten)]
    pub blog: BlogModel,
    pub author_username: String,
}
