//! Reaction targets - the blog or comment a reaction is attached to

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of entity that can receive reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Blog,
    Comment,
}

impl TargetKind {
    /// Human readable resource name, used in error messages
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Blog => "Blog",
            Self::Comment => "Comment",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blog => f.write_str("blog"),
            Self::Comment => f.write_str("comment"),
        }
    }
}

/// A concrete reaction target: kind plus identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionTarget {
    pub kind: TargetKind,
    pub id: Uuid,
}

impl ReactionTarget {
    pub const fn blog(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Blog,
            id,
        }
    }

    pub const fn comment(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Comment,
            id,
        }
    }
}

impl fmt::Display for ReactionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
