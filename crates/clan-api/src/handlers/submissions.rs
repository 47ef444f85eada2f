//! Goal submission handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use clan_core::{SubmissionFilter, SubmissionStatus};
use clan_service::{
    AdminCreateSubmissionRequest, CreateSubmissionRequest, RejectRequest,
    SubmissionDetailResponse, SubmissionResponse, SubmissionService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmissionListQuery {
    pub status: Option<SubmissionStatus>,
    pub goal_id: Option<Uuid>,
}

/// POST /api/submissions
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSubmissionRequest>,
) -> ApiResult<Json<SubmissionResponse>> {
    let service = SubmissionService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Json(response))
}

/// GET /api/submissions?status=PENDING&goal_id=...
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SubmissionListQuery>,
) -> ApiResult<Json<Vec<SubmissionDetailResponse>>> {
    auth.require_staff()?;

    let filter = SubmissionFilter {
        status: query.status,
        goal_id: query.goal_id,
    };
    let service = SubmissionService::new(state.service_context());
    Ok(Json(service.list(filter).await?))
}

/// GET /api/submissions/mine
pub async fn mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SubmissionDetailResponse>>> {
    let service = SubmissionService::new(state.service_context());
    Ok(Json(service.mine(auth.user_id).await?))
}

/// POST /api/submissions/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = SubmissionService::new(state.service_context());
    service.approve(id, auth.user_id).await?;
    Ok(NoContent)
}

/// POST /api/submissions/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<RejectRequest>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = SubmissionService::new(state.service_context());
    service.reject(id, auth.user_id, request).await?;
    Ok(NoContent)
}

/// POST /api/submissions/admin-create
pub async fn admin_create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AdminCreateSubmissionRequest>,
) -> ApiResult<Json<SubmissionResponse>> {
    auth.require_staff()?;

    let service = SubmissionService::new(state.service_context());
    let response = service.admin_create(auth.user_id, request).await?;
    Ok(Json(response))
}

/// DELETE /api/submissions/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = SubmissionService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
