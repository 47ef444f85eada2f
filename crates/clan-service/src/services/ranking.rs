//! Ranking service
//!
//! Leaderboards derived from the stats ledger. Totals always come from
//! aggregating snapshot rows; there is no cached counter to drift.

use tracing::instrument;

use clan_core::traits::{UserFilter, UserTotals};

use crate::dto::{LeaderboardEntry, LeaderboardResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of rows per board
const BOARD_SIZE: usize = 20;

/// Ranking service
pub struct RankingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RankingService<'a> {
    /// Create a new RankingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The four top-20 boards
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> ServiceResult<LeaderboardResponse> {
        let totals = self.ctx.stats_repo().totals().await?;
        let users = self.ctx.user_repo().list(UserFilter::default()).await?;

        let nickname_of = |totals: &UserTotals| {
            users
                .iter()
                .find(|u| u.id == totals.user_id)
                .map_or_else(|| totals.user_id.to_string(), |u| u.nickname.clone())
        };

        let board = |value_of: fn(&UserTotals) -> i64| {
            let mut entries: Vec<LeaderboardEntry> = totals
                .iter()
                .map(|t| LeaderboardEntry {
                    user_id: t.user_id,
                    nickname: nickname_of(t),
                    value: value_of(t),
                })
                .collect();
            entries.sort_by(|a, b| b.value.cmp(&a.value));
            entries.truncate(BOARD_SIZE);
            entries
        };

        Ok(LeaderboardResponse {
            top_by_rank_points: board(|t| t.rank_points),
            top_by_goals_completed: board(|t| t.goals_completed),
            top_by_daily_goals: board(|t| t.daily_goals_points),
            top_by_clan_contribs: board(|t| t.clan_contrib_approved_count),
        })
    }
}
