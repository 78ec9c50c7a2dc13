//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in inkwell-core.
//! Each repository handles database operations for a specific domain entity.

mod blog;
mod comment;
mod error;
mod reaction;
mod user;

pub use blog::PgBlogRepository;
pub use comment::PgCommentRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
