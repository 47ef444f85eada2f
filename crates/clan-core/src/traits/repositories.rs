//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. Multi-step mutations (approve + stats,
//! accept + user creation, delete + stats reversal, fan-out) are single
//! trait methods so implementations can run them as one atomic
//! transaction; callers never compose these from smaller calls.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::{
    ApplicationStatus, Assignment, AssignmentSubmission, AssignmentSubmissionStatus, AuditEntry,
    Goal, GoalScope, GoalStatus, GoalSubmission, GoalVisibility, Notification,
    RecruitmentApplication, Role, SubmissionStatus, Upload, User, UserStats, UserStatus,
};
use crate::error::DomainError;
use crate::value_objects::{StatsDelta, UtcDay};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Filter for listing users
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by unique nickname
    async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<User>>;

    /// Find user by email (staff accounts)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if a nickname is already taken
    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool>;

    /// Create a new user with a password hash
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// List users, optionally filtered by role/status, newest first
    async fn list(&self, filter: UserFilter) -> RepoResult<Vec<User>>;

    /// Change a user's role
    async fn update_role(&self, id: Uuid, role: Role) -> RepoResult<()>;

    /// Change a user's account status (deactivation sets INACTIVE)
    async fn update_status(&self, id: Uuid, status: UserStatus) -> RepoResult<()>;

    /// Replace the password hash and set the forced-change flag
    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        must_change_password: bool,
    ) -> RepoResult<()>;

    /// Update self-editable contact fields
    async fn update_contact(
        &self,
        id: Uuid,
        discord_tag: Option<String>,
        email: Option<String>,
    ) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
}

// ============================================================================
// Goal Repository
// ============================================================================

/// Filter for listing goals
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalFilter {
    pub status: Option<GoalStatus>,
    pub visibility: Option<GoalVisibility>,
    pub scope: Option<GoalScope>,
}

#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Find goal by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Goal>>;

    /// List goals, newest first
    async fn list(&self, filter: GoalFilter) -> RepoResult<Vec<Goal>>;

    /// Create a new goal
    async fn create(&self, goal: &Goal) -> RepoResult<()>;

    /// Update an existing goal
    async fn update(&self, goal: &Goal) -> RepoResult<()>;

    /// Delete a goal
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Goal Submission Repository
// ============================================================================

/// Filter for listing goal submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    pub goal_id: Option<Uuid>,
}

#[async_trait]
pub trait GoalSubmissionRepository: Send + Sync {
    /// Find submission by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<GoalSubmission>>;

    /// Create a new pending submission
    async fn create(&self, submission: &GoalSubmission) -> RepoResult<()>;

    /// Privileged insert at an arbitrary status. When the submission is
    /// already APPROVED the award is applied to the submitter's snapshot
    /// row for `snapshot_date` in the same transaction as the insert.
    /// The daily-uniqueness guard is deliberately not evaluated here.
    async fn create_reviewed(
        &self,
        submission: &GoalSubmission,
        award: Option<(StatsDelta, NaiveDate)>,
    ) -> RepoResult<()>;

    /// List submissions, newest first
    async fn list(&self, filter: SubmissionFilter) -> RepoResult<Vec<GoalSubmission>>;

    /// List a member's own submissions, newest first
    async fn list_by_submitter(&self, user_id: Uuid) -> RepoResult<Vec<GoalSubmission>>;

    /// Approve a PENDING submission and apply the award to the submitter's
    /// snapshot row for `today`, all in one transaction.
    ///
    /// When `enforce_daily_unique` is set, the transaction first checks for
    /// another APPROVED submission by the same member for the same goal
    /// within `today`'s window and aborts with `AlreadyCompletedToday`.
    /// A non-PENDING submission yields `AlreadyReviewed`.
    async fn approve(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        award: StatsDelta,
        today: UtcDay,
        enforce_daily_unique: bool,
    ) -> RepoResult<()>;

    /// Reject a PENDING submission with an optional reason
    async fn reject(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        reason: Option<String>,
    ) -> RepoResult<()>;

    /// Delete a submission of any status together with its upload rows.
    /// If the row is APPROVED at deletion time, `reversal` is subtracted
    /// (floored at zero) from the snapshot row keyed by the submission's
    /// original creation day, in the same transaction as the delete.
    /// Returns the deleted row.
    async fn delete(&self, id: Uuid, reversal: StatsDelta) -> RepoResult<GoalSubmission>;

    /// Sum of approved submission amounts for a goal (clan-goal progress)
    async fn approved_amount_total(&self, goal_id: Uuid) -> RepoResult<i64>;
}

// ============================================================================
// Assignment Repository
// ============================================================================

/// Per-assignment submission counts grouped by status
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentStatusCounts {
    pub assignment_id: Uuid,
    pub open: i64,
    pub submitted: i64,
    pub approved: i64,
    pub rejected: i64,
}

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Create an assignment and fan out one OPEN submission row per
    /// assignee, in one transaction
    async fn create_with_assignees(
        &self,
        assignment: &Assignment,
        assignee_ids: &[Uuid],
    ) -> RepoResult<()>;

    /// Find assignment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Assignment>>;

    /// List all assignments, newest first
    async fn list(&self) -> RepoResult<Vec<Assignment>>;

    /// Submission counts per assignment, grouped by status
    async fn status_counts(&self) -> RepoResult<Vec<AssignmentStatusCounts>>;

    /// Find one submission row by ID
    async fn find_submission(&self, id: Uuid) -> RepoResult<Option<AssignmentSubmission>>;

    /// Find the submission row for one (assignment, assignee) pair
    async fn find_submission_for(
        &self,
        assignment_id: Uuid,
        user_id: Uuid,
    ) -> RepoResult<Option<AssignmentSubmission>>;

    /// List submissions in a given status, newest first
    async fn list_submissions_by_status(
        &self,
        status: AssignmentSubmissionStatus,
    ) -> RepoResult<Vec<AssignmentSubmission>>;

    /// A member's OPEN/SUBMITTED rows, newest first
    async fn list_active_for_user(&self, user_id: Uuid) -> RepoResult<Vec<AssignmentSubmission>>;

    /// Fill in and (re)submit the member's pre-created row; `NotFound` if
    /// no row exists for the pair. Returns the updated row.
    async fn submit(
        &self,
        assignment_id: Uuid,
        user_id: Uuid,
        explanation: String,
        evidence_url: String,
    ) -> RepoResult<AssignmentSubmission>;

    /// Approve a SUBMITTED row; `NotInSubmittedState` otherwise.
    /// Returns the reviewed row.
    async fn approve_submission(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
    ) -> RepoResult<AssignmentSubmission>;

    /// Reject a SUBMITTED row; `NotInSubmittedState` otherwise.
    /// Returns the reviewed row.
    async fn reject_submission(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
    ) -> RepoResult<AssignmentSubmission>;

    /// Delete one submission row unconditionally
    async fn delete_submission(&self, id: Uuid) -> RepoResult<()>;

    /// Delete an assignment and all its submission rows, in one transaction
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Recruitment Application Repository
// ============================================================================

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Persist a new PENDING application
    async fn create(&self, application: &RecruitmentApplication) -> RepoResult<()>;

    /// Find application by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<RecruitmentApplication>>;

    /// List applications in a given status, newest first
    async fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> RepoResult<Vec<RecruitmentApplication>>;

    /// Accept a PENDING application: create the provisioned user and stamp
    /// the application ACCEPTED with reviewer + created-user linkage, in
    /// one transaction. A non-PENDING application yields `AlreadyReviewed`
    /// and no user is created.
    async fn accept(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        user: &User,
        password_hash: &str,
    ) -> RepoResult<()>;

    /// Reject a PENDING application; `AlreadyReviewed` otherwise
    async fn reject(&self, id: Uuid, reviewer_id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// User Stats Repository
// ============================================================================

/// Lifetime totals per user, aggregated over snapshot rows
#[derive(Debug, Clone, Copy, Default)]
pub struct UserTotals {
    pub user_id: Uuid,
    pub goals_completed: i64,
    pub rank_points: i64,
    pub daily_goals_points: i64,
    pub clan_contrib_approved_count: i64,
}

#[async_trait]
pub trait UserStatsRepository: Send + Sync {
    /// Find one snapshot row
    async fn find(&self, user_id: Uuid, snapshot_date: NaiveDate) -> RepoResult<Option<UserStats>>;

    /// Aggregate lifetime totals per user over all snapshot rows
    async fn totals(&self) -> RepoResult<Vec<UserTotals>>;
}

// ============================================================================
// Upload Repository
// ============================================================================

#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// Persist a batch of upload records
    async fn create_many(&self, uploads: &[Upload]) -> RepoResult<()>;

    /// Upload rows attached to a goal submission
    async fn list_by_submission(&self, submission_id: Uuid) -> RepoResult<Vec<Upload>>;

    /// Count of upload rows attached to a goal submission
    async fn count_for_submission(&self, submission_id: Uuid) -> RepoResult<i64>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist a notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// A recipient's notifications, newest first
    async fn list_for(&self, recipient_id: Uuid) -> RepoResult<Vec<Notification>>;

    /// Mark one of the recipient's own notifications read; a notification
    /// belonging to someone else yields `NotificationNotFound`
    async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append one entry; the log is never mutated or deleted
    async fn append(&self, entry: &AuditEntry) -> RepoResult<()>;

    /// Most recent entries, newest first
    async fn list(&self, limit: i64) -> RepoResult<Vec<AuditEntry>>;
}
