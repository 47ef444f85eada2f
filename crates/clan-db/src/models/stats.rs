//! User stats snapshot database model

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for user_stats table; unique on (user_id, snapshot_date)
#[derive(Debug, Clone, FromRow)]
pub struct UserStatsModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub snapshot_date: NaiveDate,
    pub goals_completed: i32,
    pub rank_points: i32,
    pub daily_goals_points: i32,
    pub clan_contrib_approved_count: i32,
}
