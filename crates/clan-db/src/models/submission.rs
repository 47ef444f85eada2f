//! Goal submission database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for goal_submissions table
#[derive(Debug, Clone, FromRow)]
pub struct GoalSubmissionModel {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub submitted_by: Uuid,
    pub amount: Option<i64>,
    pub note: Option<String>,
    pub evidence_url: Option<String>,
    /// Status stored as string: PENDING | APPROVED | REJECTED
    pub status: String,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
