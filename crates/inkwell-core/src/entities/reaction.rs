//! Reaction entity - one user's stance on one blog or comment

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{ReactionStatus, ReactionTarget};

/// Reaction entity; at most one exists per (user, target)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: Uuid,
    pub target: ReactionTarget,
    pub status: ReactionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create the record produced by a first toggle
    pub fn new(user_id: Uuid, target: ReactionTarget) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            target,
            status: ReactionStatus::INITIAL,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply one toggle to this record
    pub fn toggle(&mut self) -> ReactionStatus {
        self.status = self.status.toggled();
        self.updated_at = Utc::now();
        self.status
    }
}

/// Aggregated like/dislike counts for one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTally {
    pub target_id: Uuid,
    pub likes: i64,
    pub dislikes: i64,
}

impl ReactionTally {
    /// Tally for a target with no reactions
    pub const fn zero(target_id: Uuid) -> Self {
        Self {
            target_id,
            likes: 0,
            dislikes: 0,
        }
    }

    /// Accumulate one reaction status into the tally
    pub fn record(&mut self, status: ReactionStatus) {
        match status {
            ReactionStatus::Like => self.likes += 1,
            ReactionStatus::Dislike => self.dislikes += 1,
            ReactionStatus::Neutral => {}
        }
    }
}
