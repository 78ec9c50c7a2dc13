//! Authentication service
//!
//! Handles user registration, login and token refresh. Tokens are stateless
//! JWTs; a refresh simply issues a new pair for a still-active user.

use inkwell_common::auth::{hash_password, validate_password_strength, verify_password};
use inkwell_common::AppError;
use inkwell_core::entities::User;
use inkwell_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RefreshTokenRequest, RegisterRequest, TokenResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password)?;

        if self.ctx.user_repo().username_exists(&request.username).await? {
            warn!("Registration rejected: username taken");
            return Err(DomainError::UsernameTaken.into());
        }

        let password_hash = hash_password(&request.password)?;

        let user = User::new(request.username, request.first_name, request.last_name);

        // A concurrent registration can still win the race; the unique
        // constraint reports it as UsernameTaken
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(UserResponse::from(user))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        if !user.can_login() {
            warn!(user_id = %user.id, "Login failed: account disabled");
            return Err(DomainError::AccountDisabled.into());
        }

        let token_pair = self.ctx.jwt_service().generate_token_pair(user.id)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(TokenResponse::from(token_pair))
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<TokenResponse> {
        let claims = self.ctx.jwt_service().validate_refresh_token(&request.refresh)?;
        let user_id = claims.user_id()?;

        // The account may have been removed or disabled since the token was issued
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        if !user.can_login() {
            return Err(DomainError::AccountDisabled.into());
        }

        let token_pair = self.ctx.jwt_service().generate_token_pair(user.id)?;

        info!(user_id = %user.id, "Tokens refreshed");

        Ok(TokenResponse::from(token_pair))
    }
}
