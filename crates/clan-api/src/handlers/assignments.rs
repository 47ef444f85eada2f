//! Assignment handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use clan_core::AssignmentSubmissionStatus;
use clan_service::{
    AssignmentResponse, AssignmentService, AssignmentSubmissionDetailResponse,
    AssignmentSubmissionResponse, AssignmentWithCountsResponse, CreateAssignmentRequest,
    RejectRequest, SubmitAssignmentRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignmentSubmissionsQuery {
    pub status: Option<AssignmentSubmissionStatus>,
}

/// POST /api/assignments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateAssignmentRequest>,
) -> ApiResult<Json<AssignmentResponse>> {
    auth.require_staff()?;

    let service = AssignmentService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Json(response))
}

/// GET /api/assignments
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AssignmentWithCountsResponse>>> {
    auth.require_staff()?;

    let service = AssignmentService::new(state.service_context());
    Ok(Json(service.list_with_counts().await?))
}

/// GET /api/assignments/submissions?status=SUBMITTED
pub async fn submissions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AssignmentSubmissionsQuery>,
) -> ApiResult<Json<Vec<AssignmentSubmissionDetailResponse>>> {
    auth.require_staff()?;

    let status = query.status.unwrap_or(AssignmentSubmissionStatus::Submitted);
    let service = AssignmentService::new(state.service_context());
    Ok(Json(service.submissions_by_status(status).await?))
}

/// GET /api/assignments/my
pub async fn my(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AssignmentSubmissionDetailResponse>>> {
    let service = AssignmentService::new(state.service_context());
    Ok(Json(service.my_active(auth.user_id).await?))
}

/// POST /api/assignments/{id}/submit
pub async fn submit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<SubmitAssignmentRequest>,
) -> ApiResult<Json<AssignmentSubmissionResponse>> {
    let service = AssignmentService::new(state.service_context());
    let response = service.submit(id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// POST /api/assignments/submissions/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = AssignmentService::new(state.service_context());
    service.approve(id, auth.user_id).await?;
    Ok(NoContent)
}

/// POST /api/assignments/submissions/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<RejectRequest>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = AssignmentService::new(state.service_context());
    service.reject(id, auth.user_id, request).await?;
    Ok(NoContent)
}

/// DELETE /api/assignments/submissions/{id}
pub async fn delete_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = AssignmentService::new(state.service_context());
    service.delete_submission(id).await?;
    Ok(NoContent)
}

/// DELETE /api/assignments/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = AssignmentService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
