//! Goal submission entity - a member's claim of progress toward a goal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review status of a goal submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Goal submission entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSubmission {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub submitted_by: Uuid,
    pub amount: Option<i64>,
    pub note: Option<String>,
    pub evidence_url: Option<String>,
    pub status: SubmissionStatus,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GoalSubmission {
    /// Create a new pending submission
    #[must_use]
    pub fn new(
        id: Uuid,
        goal_id: Uuid,
        submitted_by: Uuid,
        amount: Option<i64>,
        note: Option<String>,
        evidence_url: Option<String>,
    ) -> Self {
        Self {
            id,
            goal_id,
            submitted_by,
            amount,
            note,
            evidence_url,
            status: SubmissionStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            rejection_reason: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the submission still awaits review
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// An external link counts as evidence on its own
    #[inline]
    #[must_use]
    pub fn has_evidence_link(&self) -> bool {
        self.evidence_url.is_some()
    }
}
