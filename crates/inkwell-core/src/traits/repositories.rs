//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Blog, BlogSummary, Comment, CommentSummary, Reaction, ReactionTally, User};
use crate::error::DomainError;
use crate::value_objects::{PageRequest, ReactionStatus, ReactionTarget, TargetKind};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by username (case-sensitive)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Delete a user; their blogs, comments and reactions go with them.
    ///
    /// No endpoint removes accounts; this exists for administrative cleanup
    /// and for tests of the cascade.
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Blog Repository
// ============================================================================

/// Filters for blog listings
#[derive(Debug, Clone, Default)]
pub struct BlogQuery {
    pub page: PageRequest,
    /// Case-insensitive match against title or body
    pub search: Option<String>,
    /// Restrict to one author
    pub author_id: Option<Uuid>,
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find blog by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Blog>>;

    /// List blogs newest first, returning the page and the total match count
    async fn list(&self, query: BlogQuery) -> RepoResult<(Vec<BlogSummary>, i64)>;

    /// Create a new blog
    async fn create(&self, blog: &Blog) -> RepoResult<()>;

    /// Update title, body and image
    async fn update(&self, blog: &Blog) -> RepoResult<()>;

    /// Delete a blog with its comments and reactions
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// All comments on the given blogs, oldest first
    async fn find_by_blogs(&self, blog_ids: &[Uuid]) -> RepoResult<Vec<CommentSummary>>;

    /// All comments written by a user, oldest first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<CommentSummary>>;

    /// Every comment, ordered by author then creation time
    async fn find_all(&self) -> RepoResult<Vec<CommentSummary>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update comment text
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment with its reactions
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// Result of a toggle: the caller's new status and the target's tally
/// observed in the same atomic step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub status: ReactionStatus,
    pub tally: ReactionTally,
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Atomically flip the caller's reaction on a target.
    ///
    /// Creates the record as `Like` when none exists. Returns
    /// `BlogNotFound`/`CommentNotFound` when the target is missing and
    /// `UserNotFound` when the caller no longer exists. Two concurrent
    /// toggles by the same user must serialize.
    async fn toggle(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<ToggleOutcome>;

    /// Find a user's reaction on a target
    async fn find(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<Option<Reaction>>;

    /// Number of `Like` records on a target
    async fn count_likes(&self, target: ReactionTarget) -> RepoResult<i64>;

    /// Number of `Dislike` records on a target
    async fn count_dislikes(&self, target: ReactionTarget) -> RepoResult<i64>;

    /// Like and dislike counts for one target
    async fn tally(&self, target: ReactionTarget) -> RepoResult<ReactionTally> {
        let mut tallies = self.tally_many(target.kind, &[target.id]).await?;
        Ok(tallies.pop().unwrap_or(ReactionTally::zero(target.id)))
    }

    /// Tallies for many targets of one kind in a single query.
    ///
    /// The result holds one entry per requested id, in request order;
    /// targets without reactions get zero counts.
    async fn tally_many(&self, kind: TargetKind, ids: &[Uuid]) -> RepoResult<Vec<ReactionTally>>;
}
