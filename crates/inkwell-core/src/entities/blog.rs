//! Blog entity - a post written by a user

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Blog entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub blog_text: String,
    pub main_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new Blog owned by `user_id`
    pub fn new(user_id: Uuid, title: String, blog_text: String, main_image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            blog_text,
            main_image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether `user_id` wrote this blog
    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Apply a partial update; `None` leaves a field untouched
    pub fn apply_update(
        &mut self,
        title: Option<String>,
        blog_text: Option<String>,
        main_image: Option<String>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(text) = blog_text {
            self.blog_text = text;
        }
        if let Some(image) = main_image {
            self.main_image = Some(image);
        }
        self.updated_at = Utc::now();
    }
}

/// Blog joined with its author's username, as listed on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSummary {
    pub blog: Blog,
    pub author_username: String,
}
