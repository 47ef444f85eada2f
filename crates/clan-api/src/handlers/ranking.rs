//! Ranking handler

use axum::{extract::State, Json};

use clan_service::{LeaderboardResponse, RankingService};

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/ranking - public leaderboards
pub async fn leaderboard(State(state): State<AppState>) -> ApiResult<Json<LeaderboardResponse>> {
    let service = RankingService::new(state.service_context());
    Ok(Json(service.leaderboard().await?))
}
