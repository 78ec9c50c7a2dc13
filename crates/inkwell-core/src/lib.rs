//! # inkwell-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Blog, BlogSummary, Comment, CommentSummary, Reaction, ReactionTally, User};
pub use error::DomainError;
pub use traits::{
    BlogQuery, BlogRepository, CommentRepository, ReactionRepository, RepoResult,
    ToggleOutcome, UserRepository,
};
pub use value_objects::{PageRequest, ReactionStatus, ReactionTarget, TargetKind};
