//! Goal handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use clan_core::{GoalFilter, GoalScope, GoalStatus, GoalVisibility};
use clan_service::{
    CreateGoalRequest, GoalProgressResponse, GoalResponse, GoalService, UpdateGoalRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GoalListQuery {
    pub status: Option<GoalStatus>,
    pub visibility: Option<GoalVisibility>,
    pub scope: Option<GoalScope>,
}

/// GET /api/goals?status=ACTIVE
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<GoalListQuery>,
) -> ApiResult<Json<Vec<GoalResponse>>> {
    let filter = GoalFilter {
        status: Some(query.status.unwrap_or(GoalStatus::Active)),
        visibility: query.visibility,
        scope: query.scope,
    };
    let service = GoalService::new(state.service_context());
    Ok(Json(service.list(filter).await?))
}

/// GET /api/public/goals - active public goals, no auth
pub async fn list_public(State(state): State<AppState>) -> ApiResult<Json<Vec<GoalResponse>>> {
    let service = GoalService::new(state.service_context());
    Ok(Json(service.list_public().await?))
}

/// POST /api/goals
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGoalRequest>,
) -> ApiResult<Json<GoalResponse>> {
    auth.require_staff()?;

    let service = GoalService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Json(response))
}

/// PATCH /api/goals/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateGoalRequest>,
) -> ApiResult<Json<GoalResponse>> {
    auth.require_staff()?;

    let service = GoalService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

/// DELETE /api/goals/{id} - leader only
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    auth.require_leader()?;

    let service = GoalService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}

/// GET /api/goals/{id}/progress
pub async fn progress(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<GoalProgressResponse>> {
    let service = GoalService::new(state.service_context());
    Ok(Json(service.progress(id).await?))
}
