//! Notification service
//!
//! In-app notifications: best-effort creation as a side effect of reviews,
//! plus the recipient-facing read side.

use tracing::{instrument, warn};
use uuid::Uuid;

use clan_core::entities::{Notification, NotificationKind};

use crate::dto::NotificationResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fire-and-forget creation; runs after the primary transaction has
    /// committed, so a failure is logged rather than surfaced
    #[instrument(skip(self, title, message))]
    pub async fn notify(
        &self,
        recipient_id: Uuid,
        kind: NotificationKind,
        title: &str,
        message: &str,
    ) {
        let notification = Notification::new(
            Uuid::new_v4(),
            recipient_id,
            kind,
            title.to_string(),
            message.to_string(),
        );

        if let Err(e) = self.ctx.notification_repo().create(&notification).await {
            warn!(error = %e, recipient_id = %recipient_id, "Failed to persist notification");
        }
    }

    /// The caller's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list_mine(&self, user_id: Uuid) -> ServiceResult<Vec<NotificationResponse>> {
        let notifications = self.ctx.notification_repo().list_for(user_id).await?;
        Ok(notifications.iter().map(NotificationResponse::from).collect())
    }

    /// Mark one of the caller's notifications read; a foreign notification
    /// yields not-found
    #[instrument(skip(self))]
    pub async fn mark_read(&self, id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        self.ctx.notification_repo().mark_read(id, user_id).await?;
        Ok(())
    }
}
