//! Reaction entity <-> model mapper

use inkwell_core::entities::{Reaction, ReactionTally};
use inkwell_core::error::DomainError;
use inkwell_core::value_objects::{ReactionStatus, ReactionTarget, TargetKind};

use crate::models::{ReactionModel, ReactionTallyModel};

/// Convert a ReactionModel to a Reaction entity.
///
/// The row does not know which table it came from, so the caller supplies
/// the target kind. Fails on a status code outside `-1..=1`.
pub fn reaction_from_model(model: ReactionModel, kind: TargetKind) -> Result<Reaction, DomainError> {
    let status = ReactionStatus::try_from(model.status).map_err(DomainError::InvalidReactionStatus)?;

    Ok(Reaction {
        user_id: model.user_id,
        target: ReactionTarget { kind, id: model.target_id },
        status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

/// Convert ReactionTallyModel to ReactionTally
impl From<ReactionTallyModel> for ReactionTally {
    fn from(model: ReactionTallyModel) -> Self {
        ReactionTally {
            target_id: model.target_id,
            likes: model.likes,
            dislikes: model.dislikes,
        }
    }
}
