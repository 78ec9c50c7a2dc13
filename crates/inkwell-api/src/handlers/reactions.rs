//! Reaction handlers
//!
//! Each call flips the caller's reaction on the target and returns the
//! target's like count afterwards.

use axum::{extract::State, Json};
use inkwell_service::dto::{BlogReactionRequest, CommentReactionRequest, ToggleReactionResponse};
use inkwell_service::ReactionService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /blogs/like/
pub async fn toggle_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BlogReactionRequest>,
) -> ApiResult<Json<ToggleReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.toggle_blog(auth.user_id, request).await?;
    Ok(Json(response))
}

/// POST /comments/like/
pub async fn toggle_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CommentReactionRequest>,
) -> ApiResult<Json<ToggleReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.toggle_comment(auth.user_id, request).await?;
    Ok(Json(response))
}
