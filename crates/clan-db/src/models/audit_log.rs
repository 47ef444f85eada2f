//! Audit log database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for audit_logs table; rows are append-only
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: Uuid,
    pub actor_id: Uuid,
    /// Action code, e.g. SUBMISSION_APPROVED
    pub action: String,
    /// Entity type, e.g. GOAL_SUBMISSION
    pub entity: String,
    pub entity_id: Option<Uuid>,
    /// Free-form JSON context
    pub metadata: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}
