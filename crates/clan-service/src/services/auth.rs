//! Authentication service
//!
//! Login by nickname (members) or email (staff), profile lookup, and the
//! forced-password-change flow for provisioned accounts.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use clan_common::auth::validate_password_strength;
use clan_common::AppError;

use crate::dto::{ChangePasswordRequest, LoginRequest, LoginResponse, ProfileResponse};

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

    /// Login with nickname or email plus password
    #[instrument(skip(self, request), fields(identifier = %request.identifier))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = match self
            .ctx
            .user_repo()
            .find_by_nickname(&request.identifier)
            .await?
        {
            Some(user) => Some(user),
            None => self.ctx.user_repo().find_by_email(&request.identifier).await?,
        };

        let user = user.ok_or_else(|| {
            warn!("Login failed: unknown identifier");
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

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .map_err(|e| {
                warn!(user_id = %user.id, "Login failed: invalid password");
                ServiceError::App(e)
            })?;

        if !user.is_active() {
            return Err(ServiceError::App(AppError::AccountInactive));
        }

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id, user.role, user.must_change_password)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            token,
            role: user.role,
            nickname: user.nickname,
            must_change_password: user.must_change_password,
        })
    }

    /// The caller's own profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Uuid) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(ProfileResponse::from(&user))
    }

    /// Change the caller's password, clearing the forced-change flag
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let current_ok = self
            .ctx
            .password_service()
            .verify(&request.current_password, &password_hash)
            .map_err(ServiceError::from)?;

        if !current_ok {
            return Err(ServiceError::validation("Current password is incorrect"));
        }

        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let new_hash = self
            .ctx
            .password_service()
            .hash(&request.new_password)
            .map_err(ServiceError::from)?;

        self.ctx
            .user_repo()
            .update_password(user_id, &new_hash, false)
            .await?;

        info!(user_id = %user_id, "Password changed");

        Ok(())
    }
}
