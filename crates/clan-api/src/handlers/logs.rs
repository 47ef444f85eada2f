//! Audit log handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use clan_service::{AuditEntryResponse, AuditService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<i64>,
}

/// GET /api/logs?limit=100
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<LogsQuery>,
) -> ApiResult<Json<Vec<AuditEntryResponse>>> {
    auth.require_staff()?;

    let service = AuditService::new(state.service_context());
    Ok(Json(service.list(query.limit.unwrap_or(100)).await?))
}
