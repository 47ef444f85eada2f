//! Recruitment application handlers
//!
//! Submission and the challenge endpoint are public; review is staff-only.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use clan_core::ApplicationStatus;
use clan_service::{
    AcceptedApplicationResponse, ApplicationReceivedResponse, ApplicationResponse,
    ApplicationSummaryResponse, ChallengeResponse, RecruitmentService, RejectRequest,
    SubmitApplicationRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplicationListQuery {
    pub status: Option<ApplicationStatus>,
}

/// GET /api/public/challenge
pub async fn challenge(State(state): State<AppState>) -> ApiResult<Json<ChallengeResponse>> {
    let service = RecruitmentService::new(state.service_context());
    Ok(Json(service.challenge()?))
}

/// POST /api/applications (public)
pub async fn submit(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitApplicationRequest>,
) -> ApiResult<Json<ApplicationReceivedResponse>> {
    let service = RecruitmentService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Json(response))
}

/// GET /api/applications?status=PENDING
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ApplicationListQuery>,
) -> ApiResult<Json<Vec<ApplicationSummaryResponse>>> {
    auth.require_staff()?;

    let status = query.status.unwrap_or(ApplicationStatus::Pending);
    let service = RecruitmentService::new(state.service_context());
    Ok(Json(service.list(status).await?))
}

/// GET /api/applications/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApplicationResponse>> {
    auth.require_staff()?;

    let service = RecruitmentService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/applications/{id}/accept
pub async fn accept(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<AcceptedApplicationResponse>> {
    auth.require_staff()?;

    let service = RecruitmentService::new(state.service_context());
    let response = service.accept(id, auth.user_id).await?;
    Ok(Json(response))
}

/// POST /api/applications/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<RejectRequest>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;

    let service = RecruitmentService::new(state.service_context());
    service.reject(id, auth.user_id, request).await?;
    Ok(NoContent)
}
