//! Recruitment application entity - a public candidacy form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review status; ACCEPTED and REJECTED are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "ACCEPTED" => Some(Self::Accepted),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Recruitment application entity
///
/// Acceptance provisions a new MEMBER account and links it back through
/// `accepted_user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecruitmentApplication {
    pub id: Uuid,
    pub nickname: String,
    pub discord_tag: String,
    pub age: i32,
    pub region: String,
    pub game_experience: String,
    pub highest_rank: String,
    pub preferences: String,
    pub weekly_hours: i32,
    pub prior_clan: bool,
    pub why_left_prior_clan: Option<String>,
    pub why_join_us: String,
    pub portfolio_links: Option<String>,
    pub status: ApplicationStatus,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub accepted_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl RecruitmentApplication {
    /// Check if the application still awaits review
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}
