//! Blog handlers

use axum::{extract::State, Json};
use inkwell_service::dto::{
    ApiResponse, BlogResponse, CreateBlogRequest, DeleteBlogRequest, MessageResponse,
    PageResponse, UpdateBlogRequest,
};
use inkwell_service::BlogService;

use crate::extractors::{AuthUser, ListQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// The caller's blogs
///
/// GET /blogs/?page=&page_size=&search=
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
    ListQuery(query): ListQuery,
) -> ApiResult<Json<PageResponse<BlogResponse>>> {
    let service = BlogService::new(state.service_context());
    let page = service.list_mine(auth.user_id, query).await?;
    Ok(Json(page))
}

/// Every blog, no authentication required
///
/// GET /publicblogs/?page=&page_size=&search=
pub async fn list_public(
    State(state): State<AppState>,
    ListQuery(query): ListQuery,
) -> ApiResult<Json<PageResponse<BlogResponse>>> {
    let service = BlogService::new(state.service_context());
    let page = service.list_public(query).await?;
    Ok(Json(page))
}

/// POST /blogs/
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBlogRequest>,
) -> ApiResult<Created<Json<ApiResponse<BlogResponse>>>> {
    let service = BlogService::new(state.service_context());
    let blog = service.create(auth.user_id, request).await?;
    Ok(Created(Json(ApiResponse::new("Blog created successfully", blog))))
}

/// PATCH /blogs/
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateBlogRequest>,
) -> ApiResult<Json<ApiResponse<BlogResponse>>> {
    let service = BlogService::new(state.service_context());
    let blog = service.update(auth.user_id, request).await?;
    Ok(Json(ApiResponse::new("Blog updated successfully", blog)))
}

/// DELETE /blogs/
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<DeleteBlogRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = BlogService::new(state.service_context());
    service.delete(auth.user_id, request).await?;
    Ok(Json(MessageResponse::new("Blog deleted successfully")))
}
