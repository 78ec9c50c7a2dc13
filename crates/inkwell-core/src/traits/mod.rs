mod repositories;

pub use repositories::{
    BlogQuery, BlogRepository, CommentRepository, ReactionRepository, RepoResult, ToggleOutcome,
    UserRepository,
};
