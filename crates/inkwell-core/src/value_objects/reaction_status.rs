//! Reaction status - a user's stance toward a blog or comment
//!
//! Stored as a small integer: `-1` dislike, `0` neutral, `1` like.
//! Only the like/neutral pair is reachable through the toggle; a dislike
//! row is still counted when present.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tri-state reaction status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionStatus {
    Dislike,
    #[default]
    Neutral,
    Like,
}

impl ReactionStatus {
    /// Status of a freshly created reaction
    pub const INITIAL: Self = Self::Like;

    /// Storage code for this status
    #[inline]
    pub const fn code(self) -> i16 {
        match self {
            Self::Dislike => -1,
            Self::Neutral => 0,
            Self::Like => 1,
        }
    }

    /// Parse a storage code
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            -1 => Some(Self::Dislike),
            0 => Some(Self::Neutral),
            1 => Some(Self::Like),
            _ => None,
        }
    }

    /// Status after one toggle from this status.
    ///
    /// Neutral becomes like; like and dislike both fall back to neutral.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Neutral => Self::Like,
            Self::Like | Self::Dislike => Self::Neutral,
        }
    }
}

impl TryFrom<i16> for ReactionStatus {
    type Error = i16;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

impl From<ReactionStatus> for i16 {
    fn from(status: ReactionStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for ReactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dislike => "dislike",
            Self::Neutral => "neutral",
            Self::Like => "like",
        };
        f.write_str(name)
    }
}
