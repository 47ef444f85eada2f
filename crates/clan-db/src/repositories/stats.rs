//! PostgreSQL implementation of UserStatsRepository
//!
//! Read side only: counter mutations happen inside the submission
//! repository's transactions, never here.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use clan_core::entities::UserStats;
use clan_core::traits::{RepoResult, UserStatsRepository, UserTotals};

use crate::models::UserStatsModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserStatsRepository
#[derive(Clone)]
pub struct PgUserStatsRepository {
    pool: PgPool,
}

impl PgUserStatsRepository {
    /// Create a new PgUserStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStatsRepository for PgUserStatsRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Uuid, snapshot_date: NaiveDate) -> RepoResult<Option<UserStats>> {
        let result = sqlx::query_as::<_, UserStatsModel>(
            r#"
            SELECT id, user_id, snapshot_date, goals_completed, rank_points,
                   daily_goals_points, clan_contrib_approved_count
            FROM user_stats
            WHERE user_id = $1 AND snapshot_date = $2
            "#,
        )
        .bind(user_id)
        .bind(snapshot_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserStats::from))
    }

    #[instrument(skip(self))]
    async fn totals(&self) -> RepoResult<Vec<UserTotals>> {
        let rows = sqlx::query_as::<_, (Uuid, i64, i64, i64, i64)>(
            r#"
            SELECT user_id,
                   COALESCE(SUM(goals_completed), 0)::BIGINT,
                   COALESCE(SUM(rank_points), 0)::BIGINT,
                   COALESCE(SUM(daily_goals_points), 0)::BIGINT,
                   COALESCE(SUM(clan_contrib_approved_count), 0)::BIGINT
            FROM user_stats
            GROUP BY user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(
                |(user_id, goals_completed, rank_points, daily_goals_points, clan_contribs)| {
                    UserTotals {
                        user_id,
                        goals_completed,
                        rank_points,
                        daily_goals_points,
                        clan_contrib_approved_count: clan_contribs,
                    }
                },
            )
            .collect())
    }
}
