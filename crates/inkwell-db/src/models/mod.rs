//! Database models - SQLx-compatible structs for PostgreSQL tables

mod blog;
mod comment;
mod reaction;
mod user;

pub use blog::{BlogModel, BlogSummaryModel};
pub use comment::{CommentModel, CommentSummaryModel};
pub use reaction::{ReactionModel, ReactionTallyModel};
pub use user::UserModel;
