//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user input also
//! implement `Validate`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use clan_core::entities::{GoalScope, GoalStatus, GoalVisibility, Role, SubmissionStatus, UserStatus};

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request; members log in by nickname, staff may use email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 64, message = "Identifier must be 3-64 characters"))]
    pub identifier: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 6, message = "Current password required"))]
    pub current_password: String,

    #[validate(length(min = 8, max = 72, message = "New password must be 8-72 characters"))]
    pub new_password: String,
}

// ============================================================================
// Goal Submission Requests
// ============================================================================

/// Evidence descriptor for an already-stored file
#[derive(Debug, Clone, Deserialize)]
pub struct EvidenceFileRequest {
    pub storage_path: String,
    pub mime_type: String,
    pub size_bytes: i64,
}

/// Member-created goal submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    pub goal_id: Uuid,

    #[validate(range(min = 0, message = "Amount must be non-negative"))]
    pub amount: Option<i64>,

    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: Option<String>,

    #[validate(url(message = "Evidence URL must be a valid URL"))]
    pub evidence_url: Option<String>,

    #[serde(default)]
    pub files: Vec<EvidenceFileRequest>,
}

/// Staff-injected submission at an arbitrary status
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminCreateSubmissionRequest {
    pub user_id: Uuid,
    pub goal_id: Uuid,

    #[validate(range(min = 0, message = "Amount must be non-negative"))]
    pub amount: Option<i64>,

    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: Option<String>,

    #[validate(url(message = "Evidence URL must be a valid URL"))]
    pub evidence_url: Option<String>,

    #[serde(default)]
    pub status: SubmissionStatus,

    #[serde(default)]
    pub files: Vec<EvidenceFileRequest>,
}

/// Optional reason accompanying a rejection
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RejectRequest {
    #[validate(length(max = 500, message = "Reason must be at most 500 characters"))]
    pub reason: Option<String>,
}

// ============================================================================
// Assignment Requests
// ============================================================================

/// Create an assignment fanned out to the listed members
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))]
    pub title: String,

    #[validate(length(min = 3, max = 2000, message = "Description must be 3-2000 characters"))]
    pub description: String,

    #[validate(length(min = 1, message = "At least one assignee is required"))]
    pub assignees: Vec<Uuid>,
}

/// Member filling in their pre-created assignment row
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAssignmentRequest {
    #[validate(length(min = 5, max = 2000, message = "Explanation must be 5-2000 characters"))]
    pub explanation: String,

    #[validate(url(message = "Evidence URL must be a valid URL"))]
    pub evidence_url: String,
}

// ============================================================================
// Recruitment Requests
// ============================================================================

/// Public recruitment application form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitApplicationRequest {
    #[validate(length(min = 3, max = 32, message = "Nickname must be 3-32 characters"))]
    pub nickname: String,

    #[validate(length(min = 2, max = 64, message = "Discord tag must be 2-64 characters"))]
    pub discord_tag: String,

    #[validate(range(min = 10, max = 120, message = "Age must be at least 10"))]
    pub age: i32,

    #[validate(length(min = 2, max = 64, message = "Region must be 2-64 characters"))]
    pub region: String,

    #[validate(length(min = 2, max = 2000, message = "Experience must be 2-2000 characters"))]
    pub game_experience: String,

    #[validate(length(min = 1, max = 64, message = "Highest rank is required"))]
    pub highest_rank: String,

    #[validate(length(min = 1, max = 500, message = "Preferences are required"))]
    pub preferences: String,

    #[validate(range(min = 0, max = 168, message = "Weekly hours must be 0-168"))]
    pub weekly_hours: i32,

    pub prior_clan: bool,

    #[validate(length(max = 1000, message = "Answer must be at most 1000 characters"))]
    pub why_left_prior_clan: Option<String>,

    #[validate(length(min = 5, max = 2000, message = "Answer must be 5-2000 characters"))]
    pub why_join_us: String,

    pub accepts_rules: bool,

    #[validate(length(max = 1000, message = "Links must be at most 1000 characters"))]
    pub portfolio_links: Option<String>,

    /// Signed challenge token previously issued to this visitor
    pub challenge_token: String,

    /// The code the visitor typed back
    pub challenge_input: String,
}

// ============================================================================
// Goal Requests
// ============================================================================

/// Create a goal
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGoalRequest {
    #[validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))]
    pub title: String,

    #[validate(length(min = 3, max = 2000, message = "Description must be 3-2000 characters"))]
    pub description: String,

    #[serde(default)]
    pub scope: GoalScope,

    #[validate(range(min = 1, message = "Target amount must be positive"))]
    pub target_amount: Option<i64>,

    #[validate(length(max = 32, message = "Unit must be at most 32 characters"))]
    pub unit: Option<String>,

    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub visibility: GoalVisibility,
}

/// Partially update a goal
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGoalRequest {
    #[validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 3, max = 2000, message = "Description must be 3-2000 characters"))]
    pub description: Option<String>,

    pub scope: Option<GoalScope>,

    pub target_amount: Option<i64>,

    #[validate(length(max = 32, message = "Unit must be at most 32 characters"))]
    pub unit: Option<String>,

    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub visibility: Option<GoalVisibility>,
    pub status: Option<GoalStatus>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Staff-created member account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 32, message = "Nickname must be 3-32 characters"))]
    pub nickname: String,

    #[validate(length(min = 2, max = 64, message = "Discord tag must be 2-64 characters"))]
    pub discord_tag: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Role,
}

/// Role change request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

/// Status change request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: UserStatus,
}

/// Self-service contact update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMeRequest {
    #[validate(length(min = 2, max = 64, message = "Discord tag must be 2-64 characters"))]
    pub discord_tag: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}
