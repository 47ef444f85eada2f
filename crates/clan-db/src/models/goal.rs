//! Goal database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for goals table
#[derive(Debug, Clone, FromRow)]
pub struct GoalModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Scope stored as string: USER | CLAN
    pub scope: String,
    pub target_amount: Option<i64>,
    pub unit: Option<String>,
    /// Status stored as string: ACTIVE | PAUSED | ARCHIVED
    pub status: String,
    /// Visibility stored as string: PUBLIC | CLAN
    pub visibility: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
