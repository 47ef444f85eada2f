//! User administration handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use clan_core::{Role, UserFilter, UserStatus};
use clan_service::{
    CreateUserRequest, CreatedUserResponse, ProfileResponse, UpdateMeRequest, UpdateRoleRequest,
    UpdateStatusRequest, UserResponse, UserService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

/// GET /api/users?role=&status=
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserListQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    auth.require_staff()?;

    let filter = UserFilter {
        role: query.role,
        status: query.status,
    };
    let service = UserService::new(state.service_context());
    Ok(Json(service.list(filter).await?))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Json<CreatedUserResponse>> {
    auth.require_staff()?;

    let service = UserService::new(state.service_context());
    let response = service.admin_create(auth.user_id, request).await?;
    Ok(Json(response))
}

/// PATCH /api/users/{id}/role - leader only
pub async fn change_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRoleRequest>,
) -> ApiResult<NoContent> {
    auth.require_leader()?;

    let service = UserService::new(state.service_context());
    service.change_role(auth.user_id, id, request.role).await?;
    Ok(NoContent)
}

/// PATCH /api/users/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = UserService::new(state.service_context());
    service.change_status(auth.user_id, id, request.status).await?;
    Ok(NoContent)
}

/// POST /api/users/{id}/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    auth.require_staff()?;

    let service = UserService::new(state.service_context());
    let temporary_password = service.reset_password(auth.user_id, id).await?;
    Ok(Json(json!({ "temporary_password": temporary_password })))
}

/// DELETE /api/users/{id} - deactivates, never deletes
pub async fn deactivate(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = UserService::new(state.service_context());
    service.deactivate(auth.user_id, id).await?;
    Ok(NoContent)
}

/// PATCH /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateMeRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_me(auth.user_id, request).await?;
    Ok(Json(response))
}
