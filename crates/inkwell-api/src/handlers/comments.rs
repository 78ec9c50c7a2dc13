//! Comment handlers

use axum::{extract::State, Json};
use inkwell_service::dto::{
    ApiResponse, AuthorCommentGroup, BlogCommentGroup, CommentResponse, CreateCommentRequest,
    DeleteCommentRequest, MessageResponse, UpdateCommentRequest,
};
use inkwell_service::CommentService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// The caller's comments grouped by blog
///
/// GET /blogs/comments/
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<BlogCommentGroup>>>> {
    let service = CommentService::new(state.service_context());
    let groups = service.list_mine(auth.user_id).await?;
    Ok(Json(ApiResponse::new("Your comments retrieved successfully", groups)))
}

/// Every comment grouped by author
///
/// GET /comments/
pub async fn list_all(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<AuthorCommentGroup>>>> {
    let service = CommentService::new(state.service_context());
    let groups = service.list_all().await?;
    Ok(Json(ApiResponse::new(
        "All comments grouped by user retrieved successfully",
        groups,
    )))
}

/// POST /blogs/comments/
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<ApiResponse<CommentResponse>>>> {
    let service = CommentService::new(state.service_context());
    let comment = service.create(auth.user_id, request).await?;
    Ok(Created(Json(ApiResponse::new("Comment added successfully", comment))))
}

/// PATCH /blogs/comments/
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<ApiResponse<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service.update(auth.user_id, request).await?;
    Ok(Json(ApiResponse::new("Comment updated successfully", comment)))
}

/// DELETE /blogs/comments/
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<DeleteCommentRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = CommentService::new(state.service_context());
    service.delete(auth.user_id, request).await?;
    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
