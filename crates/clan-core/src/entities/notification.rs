//! Notification entity - a per-recipient in-app message

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification category, used by the client for grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    FormStatus,
    GoalStatus,
    #[default]
    System,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FormStatus => "FORM_STATUS",
            Self::GoalStatus => "GOAL_STATUS",
            Self::System => "SYSTEM",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FORM_STATUS" => Some(Self::FormStatus),
            "GOAL_STATUS" => Some(Self::GoalStatus),
            "SYSTEM" => Some(Self::System),
            _ => None,
        }
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a fresh unread notification
    #[must_use]
    pub fn new(
        id: Uuid,
        recipient_id: Uuid,
        kind: NotificationKind,
        title: String,
        message: String,
    ) -> Self {
        Self {
            id,
            recipient_id,
            kind,
            title,
            message,
            read: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_unread() {
        let n = Notification::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            NotificationKind::GoalStatus,
            "Goal approved".to_string(),
            "Your contribution was approved.".to_string(),
        );
        assert!(!n.read);
        assert_eq!(n.kind, NotificationKind::GoalStatus);
    }
}
