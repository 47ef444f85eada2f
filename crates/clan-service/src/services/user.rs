//! User administration service
//!
//! Staff management of member accounts. Accounts are deactivated rather
//! than deleted, and privileged mutations land in the audit log.

use tracing::{info, instrument};
use uuid::Uuid;

use clan_common::sanitize_text;
use clan_core::entities::{Role, User, UserStatus};
use clan_core::traits::UserFilter;

use crate::dto::{
    CreateUserRequest, CreatedUserResponse, ProfileResponse, UpdateMeRequest, UserResponse,
    UserSummary,
};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User administration service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List accounts, optionally filtered by role/status
    #[instrument(skip(self))]
    pub async fn list(&self, filter: UserFilter) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list(filter).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Staff creates an account directly with a generated one-time password
    #[instrument(skip(self, request), fields(nickname = %request.nickname))]
    pub async fn admin_create(
        &self,
        actor_id: Uuid,
        request: CreateUserRequest,
    ) -> ServiceResult<CreatedUserResponse> {
        if !request
            .nickname
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(ServiceError::validation(
                "Nickname may only contain letters, digits, '.', '_' and '-'",
            ));
        }

        let temp_password = self.ctx.password_service().generate_temp();
        let password_hash = self
            .ctx
            .password_service()
            .hash(&temp_password)
            .map_err(ServiceError::from)?;

        let mut user = User::new_member(Uuid::new_v4(), request.nickname, request.discord_tag);
        user.role = request.role;
        user.email = request.email;

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, role = user.role.as_str(), "User created by staff");

        AuditService::new(self.ctx)
            .log(
                actor_id,
                "USER_CREATED",
                "USER",
                Some(user.id),
                Some(serde_json::json!({ "role": user.role.as_str() })),
            )
            .await;

        Ok(CreatedUserResponse {
            user: UserSummary::from(&user),
            temporary_password: temp_password,
        })
    }

    /// Change a member's role
    #[instrument(skip(self))]
    pub async fn change_role(&self, actor_id: Uuid, id: Uuid, role: Role) -> ServiceResult<()> {
        self.ctx.user_repo().update_role(id, role).await?;

        info!(user_id = %id, role = role.as_str(), "User role changed");

        AuditService::new(self.ctx)
            .log(
                actor_id,
                "USER_ROLE_CHANGED",
                "USER",
                Some(id),
                Some(serde_json::json!({ "role": role.as_str() })),
            )
            .await;

        Ok(())
    }

    /// Change a member's account status
    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        actor_id: Uuid,
        id: Uuid,
        status: UserStatus,
    ) -> ServiceResult<()> {
        self.ctx.user_repo().update_status(id, status).await?;

        info!(user_id = %id, status = status.as_str(), "User status changed");

        AuditService::new(self.ctx)
            .log(
                actor_id,
                "USER_STATUS_CHANGED",
                "USER",
                Some(id),
                Some(serde_json::json!({ "status": status.as_str() })),
            )
            .await;

        Ok(())
    }

    /// Reset a member's password to a fresh one-time value
    #[instrument(skip(self))]
    pub async fn reset_password(&self, actor_id: Uuid, id: Uuid) -> ServiceResult<String> {
        let temp_password = self.ctx.password_service().generate_temp();
        let password_hash = self
            .ctx
            .password_service()
            .hash(&temp_password)
            .map_err(ServiceError::from)?;

        self.ctx
            .user_repo()
            .update_password(id, &password_hash, true)
            .await?;

        info!(user_id = %id, "User password reset");

        AuditService::new(self.ctx)
            .log(actor_id, "USER_PASSWORD_RESET", "USER", Some(id), None)
            .await;

        Ok(temp_password)
    }

    /// Deactivate an account; never a hard delete
    #[instrument(skip(self))]
    pub async fn deactivate(&self, actor_id: Uuid, id: Uuid) -> ServiceResult<()> {
        self.ctx
            .user_repo()
            .update_status(id, UserStatus::Inactive)
            .await?;

        info!(user_id = %id, "User deactivated");

        AuditService::new(self.ctx)
            .log(actor_id, "USER_DEACTIVATED", "USER", Some(id), None)
            .await;

        Ok(())
    }

    /// Self-service update of contact fields
    #[instrument(skip(self, request))]
    pub async fn update_me(
        &self,
        user_id: Uuid,
        request: UpdateMeRequest,
    ) -> ServiceResult<ProfileResponse> {
        let discord_tag = sanitize_text(request.discord_tag.as_deref(), 64);
        self.ctx
            .user_repo()
            .update_contact(user_id, discord_tag, request.email)
            .await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(ProfileResponse::from(&user))
    }
}
