//! Assignment entities - staff-defined tasks fanned out to members
//!
//! Creating an assignment eagerly creates one submission row per assignee
//! in the OPEN state; the member later fills it in via Submit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assignment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle of one (assignment, assignee) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentSubmissionStatus {
    #[default]
    Open,
    Submitted,
    Approved,
    Rejected,
}

impl AssignmentSubmissionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OPEN" => Some(Self::Open),
            "SUBMITTED" => Some(Self::Submitted),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Still on the member's plate (shown in their active task list)
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::Submitted)
    }
}

/// One assignee's submission row, pre-created at fan-out time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSubmission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub user_id: Uuid,
    pub status: AssignmentSubmissionStatus,
    pub explanation: Option<String>,
    pub evidence_url: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl AssignmentSubmission {
    /// Create the initial OPEN row for one assignee
    #[must_use]
    pub fn open(id: Uuid, assignment_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id,
            assignment_id,
            user_id,
            status: AssignmentSubmissionStatus::Open,
            explanation: None,
            evidence_url: None,
            submitted_at: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_row_defaults() {
        let row = AssignmentSubmission::open(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(row.status, AssignmentSubmissionStatus::Open);
        assert!(row.explanation.is_none());
        assert!(row.evidence_url.is_none());
        assert!(row.submitted_at.is_none());
    }

    #[test]
    fn test_active_states() {
        assert!(AssignmentSubmissionStatus::Open.is_active());
        assert!(AssignmentSubmissionStatus::Submitted.is_active());
        assert!(!AssignmentSubmissionStatus::Approved.is_active());
        assert!(!AssignmentSubmissionStatus::Rejected.is_active());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            AssignmentSubmissionStatus::Open,
            AssignmentSubmissionStatus::Submitted,
            AssignmentSubmissionStatus::Approved,
            AssignmentSubmissionStatus::Rejected,
        ] {
            assert_eq!(AssignmentSubmissionStatus::parse(status.as_str()), Some(status));
        }
    }
}
