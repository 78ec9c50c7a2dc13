//! Account handlers
//!
//! Endpoints for user registration, login, and token refresh.

use axum::{extract::State, Json};
use inkwell_service::dto::{
    ApiResponse, LoginRequest, LoginResponse, RefreshTokenRequest, RegisterRequest,
    TokenResponse, UserResponse,
};
use inkwell_service::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /accounts/register/
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<ApiResponse<UserResponse>>>> {
    let service = AuthService::new(state.service_context());
    let user = service.register(request).await?;
    Ok(Created(Json(ApiResponse::new("User registered successfully", user))))
}

/// Login with username and password
///
/// POST /accounts/login/
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let service = AuthService::new(state.service_context());
    let token = service.login(request).await?;
    Ok(Json(ApiResponse::new("Login successful", LoginResponse { token })))
}

/// Exchange a refresh token for a new pair
///
/// POST /accounts/token/refresh/
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let tokens = service.refresh_tokens(request).await?;
    Ok(Json(tokens))
}
