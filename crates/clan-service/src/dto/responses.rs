//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use clan_core::entities::{
    ApplicationStatus, AssignmentSubmissionStatus, GoalScope, GoalStatus, GoalVisibility,
    NotificationKind, Role, SubmissionStatus, UserStatus,
};

// ============================================================================
// Auth Responses
// ============================================================================

/// Successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub nickname: String,
    pub must_change_password: bool,
}

/// The caller's own profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub nickname: String,
    pub discord_tag: String,
    pub email: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub must_change_password: bool,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// User Responses
// ============================================================================

/// Staff view of a member account
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub nickname: String,
    pub discord_tag: String,
    pub email: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Minimal user reference embedded in other responses
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub nickname: String,
    pub role: Role,
}

/// A freshly provisioned account and its one-time password
#[derive(Debug, Clone, Serialize)]
pub struct CreatedUserResponse {
    pub user: UserSummary,
    pub temporary_password: String,
}

// ============================================================================
// Goal Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GoalResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub scope: GoalScope,
    pub is_daily: bool,
    pub target_amount: Option<i64>,
    pub unit: Option<String>,
    pub status: GoalStatus,
    pub visibility: GoalVisibility,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Clan goal progress: pooled approved amount against the target
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgressResponse {
    pub goal: GoalResponse,
    pub approved_total: i64,
}

// ============================================================================
// Goal Submission Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub storage_path: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
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

/// Submission with joined goal/submitter/upload context for review queues
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionDetailResponse {
    #[serde(flatten)]
    pub submission: SubmissionResponse,
    pub goal: Option<GoalResponse>,
    pub submitter: Option<UserSummary>,
    pub uploads: Vec<UploadResponse>,
}

// ============================================================================
// Assignment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Per-status submission tallies for one assignment
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AssignmentCounts {
    pub open: i64,
    pub submitted: i64,
    pub approved: i64,
    pub rejected: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentWithCountsResponse {
    #[serde(flatten)]
    pub assignment: AssignmentResponse,
    pub counts: AssignmentCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentSubmissionResponse {
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

/// Assignment submission with joined context for review queues
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentSubmissionDetailResponse {
    #[serde(flatten)]
    pub submission: AssignmentSubmissionResponse,
    pub assignment: Option<AssignmentResponse>,
    pub user: Option<UserSummary>,
}

// ============================================================================
// Recruitment Responses
// ============================================================================

/// Challenge handed to a public form visitor
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeResponse {
    pub token: String,
    pub code: String,
}

/// Acknowledgement of a received application
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationReceivedResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Row in the staff review queue
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationSummaryResponse {
    pub id: Uuid,
    pub nickname: String,
    pub discord_tag: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// Full application detail
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
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

/// Result of accepting an application: the new account and its one-time
/// password for the reviewer to hand over
#[derive(Debug, Clone, Serialize)]
pub struct AcceptedApplicationResponse {
    pub user: UserSummary,
    pub temporary_password: String,
}

// ============================================================================
// Ranking Responses
// ============================================================================

/// One leaderboard row
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub nickname: String,
    pub value: i64,
}

/// The four ranking boards, each top 20
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub top_by_rank_points: Vec<LeaderboardEntry>,
    pub top_by_goals_completed: Vec<LeaderboardEntry>,
    pub top_by_daily_goals: Vec<LeaderboardEntry>,
    pub top_by_clan_contribs: Vec<LeaderboardEntry>,
}

// ============================================================================
// Notification & Audit Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditEntryResponse {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<Uuid>,
    pub metadata: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}
