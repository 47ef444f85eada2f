//! Audit service
//!
//! Append-only recording of privileged actions. Appends are best-effort:
//! a failed write is logged loudly but never fails the action it records.

use serde_json::Value as JsonValue;
use tracing::{error, instrument};
use uuid::Uuid;

use clan_core::entities::AuditEntry;

use crate::dto::AuditEntryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Audit service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    /// Create a new AuditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a privileged action. Failures are logged, not propagated, so
    /// an audit outage cannot block reviews; the error log keeps the gap
    /// from being silent.
    #[instrument(skip(self, metadata))]
    pub async fn log(
        &self,
        actor_id: Uuid,
        action: &str,
        entity: &str,
        entity_id: Option<Uuid>,
        metadata: Option<JsonValue>,
    ) {
        let entry = AuditEntry::new(Uuid::new_v4(), actor_id, action, entity, entity_id, metadata);

        if let Err(e) = self.ctx.audit_repo().append(&entry).await {
            error!(
                error = %e,
                action = action,
                entity = entity,
                "Failed to append audit log entry"
            );
        }
    }

    /// Most recent audit entries, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, limit: i64) -> ServiceResult<Vec<AuditEntryResponse>> {
        let entries = self.ctx.audit_repo().list(limit).await?;
        Ok(entries.iter().map(AuditEntryResponse::from).collect())
    }
}
