//! Blog entity <-> model mapper

use inkwell_core::entities::{Blog, BlogSummary};

use crate::models::{BlogModel, BlogSummaryModel};

/// Convert BlogModel to Blog entity
impl From<BlogModel> for Blog {
    fn from(model: BlogModel) -> Self {
        Blog {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            blog_text: model.blog_text,
            main_image: model.main_image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<BlogSummaryModel> for BlogSummary {
    fn from(model: BlogSummaryModel) -> Self {
        BlogSummary {
            blog: model.blog.into(),
            author_username: model.author_username,
        }
    }
}
