//! Upload database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for uploads table
#[derive(Debug, Clone, FromRow)]
pub struct UploadModel {
    pub id: Uuid,
    /// Kind stored as string: GOAL_EVIDENCE | USER_AVATAR
    pub kind: String,
    pub storage_path: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub goal_submission_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
