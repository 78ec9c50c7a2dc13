//! Domain entities - core business objects

mod blog;
mod comment;
mod reaction;
mod user;

pub use blog::{Blog, BlogSummary};
pub use comment::{Comment, CommentSummary};
pub use reaction::{Reaction, ReactionTally};
pub use user::User;
