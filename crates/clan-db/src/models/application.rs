//! Recruitment application database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for recruitment_applications table
#[derive(Debug, Clone, FromRow)]
pub struct RecruitmentApplicationModel {
    pub id: Uuid,
    pub nickname: String,
    pub discord_tag: String,
    pub age: i32,
    pub region: String,
    pub game_experience: String,
    pub highest_rank: String,
    pub preferences: String,
    pub weekly_hours: i32,
    pub prior_clan: bool,
    pub why_left_prior_clan: Option<String>,
    pub why_join_us: String,
    pub portfolio_links: Option<String>,
    /// Status stored as string: PENDING | ACCEPTED | REJECTED
    pub status: String,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub accepted_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
