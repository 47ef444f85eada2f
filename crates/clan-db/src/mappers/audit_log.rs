//! Audit entry entity <-> model mapper

use clan_core::entities::AuditEntry;

use crate::models::AuditLogModel;

impl From<AuditLogModel> for AuditEntry {
    fn from(model: AuditLogModel) -> Self {
        AuditEntry {
            id: model.id,
            actor_id: model.actor_id,
            action: model.action,
            entity: model.entity,
            entity_id: model.entity_id,
            metadata: model.metadata,
            created_at: model.created_at,
        }
    }
}
