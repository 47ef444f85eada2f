//! Assignment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for assignments table
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Database model for assignment_submissions table
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentSubmissionModel {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub user_id: Uuid,
    /// Status stored as string: OPEN | SUBMITTED | APPROVED | REJECTED
    pub status: String,
    pub explanation: Option<String>,
    pub evidence_url: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
