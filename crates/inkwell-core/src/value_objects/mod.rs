//! Value objects - immutable types that represent domain concepts

mod page;
mod reaction_status;
mod target;

pub use page::{PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use reaction_status::ReactionStatus;
pub use target::{ReactionTarget, TargetKind};
