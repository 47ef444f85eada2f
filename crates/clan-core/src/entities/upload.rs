//! Upload entity - an opaque stored file linked to a submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a stored file is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadKind {
    #[default]
    GoalEvidence,
    UserAvatar,
}

impl UploadKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalEvidence => "GOAL_EVIDENCE",
            Self::UserAvatar => "USER_AVATAR",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GOAL_EVIDENCE" => Some(Self::GoalEvidence),
            "USER_AVATAR" => Some(Self::UserAvatar),
            _ => None,
        }
    }
}

/// Upload record; the file itself lives outside the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub id: Uuid,
    pub kind: UploadKind,
    pub storage_path: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub goal_submission_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Upload {
    /// Evidence file attached to a goal submission
    #[must_use]
    pub fn evidence(
        id: Uuid,
        submission_id: Uuid,
        storage_path: String,
        mime_type: String,
        size_bytes: i64,
    ) -> Self {
        Self {
            id,
            kind: UploadKind::GoalEvidence,
            storage_path,
            mime_type,
            size_bytes,
            goal_submission_id: Some(submission_id),
            user_id: None,
            created_at: Utc::now(),
        }
    }
}
