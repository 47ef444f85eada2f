//! Notification entity <-> model mapper

use clan_core::entities::{Notification, NotificationKind};

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: model.id,
            recipient_id: model.recipient_id,
            kind: NotificationKind::parse(&model.kind).unwrap_or_default(),
            title: model.title,
            message: model.message,
            read: model.read,
            created_at: model.created_at,
        }
    }
}
