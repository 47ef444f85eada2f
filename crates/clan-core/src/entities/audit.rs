//! Audit log entry - append-only record of privileged actions

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// One privileged action; rows are never mutated or deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: Uuid,
    pub actor_id: Uuid,
    /// Action code, e.g. `SUBMISSION_APPROVED`
    pub action: String,
    /// Entity type the action touched, e.g. `GOAL_SUBMISSION`
    pub entity: String,
    pub entity_id: Option<Uuid>,
    pub metadata: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Build an entry stamped now
    #[must_use]
    pub fn new(
        id: Uuid,
        actor_id: Uuid,
        action: impl Into<String>,
        entity: impl Into<String>,
        entity_id: Option<Uuid>,
        metadata: Option<JsonValue>,
    ) -> Self {
        Self {
            id,
            actor_id,
            action: action.into(),
            entity: entity.into(),
            entity_id,
            metadata,
            created_at: Utc::now(),
        }
    }
}
