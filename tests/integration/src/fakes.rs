//! In-memory repository fakes
//!
//! Back the service layer with maps instead of PostgreSQL while honoring
//! the same contracts the Pg implementations provide: status transitions
//! are compare-and-swap gated, multi-step mutations validate everything
//! before mutating anything (all-or-nothing), and stats reversals floor at
//! zero.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use uuid::Uuid;

use clan_core::entities::{
    ApplicationStatus, Assignment, AssignmentSubmission, AssignmentSubmissionStatus, AuditEntry,
    Goal, GoalSubmission, Notification, RecruitmentApplication, Role, SubmissionStatus, Upload,
    User, UserStats, UserStatus,
};
use clan_core::error::DomainError;
use clan_core::traits::{
    ApplicationRepository, AssignmentRepository, AssignmentStatusCounts, AuditLogRepository,
    GoalFilter, GoalRepository, GoalSubmissionRepository, NotificationRepository, RepoResult,
    SubmissionFilter, UploadRepository, UserFilter, UserRepository, UserStatsRepository,
    UserTotals,
};
use clan_core::value_objects::{StatsDelta, UtcDay};

/// Shared backing store for all fake repositories
#[derive(Default)]
pub struct InMemoryStore {
    pub users: Mutex<HashMap<Uuid, (User, String)>>,
    pub goals: Mutex<HashMap<Uuid, Goal>>,
    pub submissions: Mutex<HashMap<Uuid, GoalSubmission>>,
    pub assignments: Mutex<HashMap<Uuid, Assignment>>,
    pub assignment_submissions: Mutex<HashMap<Uuid, AssignmentSubmission>>,
    pub applications: Mutex<HashMap<Uuid, RecruitmentApplication>>,
    pub stats: Mutex<HashMap<(Uuid, NaiveDate), UserStats>>,
    pub uploads: Mutex<HashMap<Uuid, Upload>>,
    pub notifications: Mutex<HashMap<Uuid, Notification>>,
    pub audit: Mutex<Vec<AuditEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn bump_stats(&self, user_id: Uuid, date: NaiveDate, delta: StatsDelta) {
        let mut stats = self.stats.lock();
        let row = stats
            .entry((user_id, date))
            .or_insert_with(|| UserStats::zeroed(Uuid::new_v4(), user_id, date));
        row.goals_completed += delta.goals_completed;
        row.rank_points += delta.rank_points;
        row.daily_goals_points += delta.daily_goals_points;
        row.clan_contrib_approved_count += delta.clan_contrib_approved_count;
    }

    fn reverse_stats(&self, user_id: Uuid, date: NaiveDate, delta: StatsDelta) {
        let mut stats = self.stats.lock();
        if let Some(row) = stats.get_mut(&(user_id, date)) {
            row.goals_completed = (row.goals_completed - delta.goals_completed).max(0);
            row.rank_points = (row.rank_points - delta.rank_points).max(0);
            row.daily_goals_points = (row.daily_goals_points - delta.daily_goals_points).max(0);
            row.clan_contrib_approved_count =
                (row.clan_contrib_approved_count - delta.clan_contrib_approved_count).max(0);
        }
    }
}

// ============================================================================
// Users
// ============================================================================

pub struct FakeUserRepository {
    store: Arc<InMemoryStore>,
}

impl FakeUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.store.users.lock().get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<User>> {
        Ok(self
            .store
            .users
            .lock()
            .values()
            .find(|(u, _)| u.nickname == nickname)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .store
            .users
            .lock()
            .values()
            .find(|(u, _)| u.email.as_deref() == Some(email))
            .map(|(u, _)| u.clone()))
    }

    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool> {
        Ok(self
            .store
            .users
            .lock()
            .values()
            .any(|(u, _)| u.nickname == nickname))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.store.users.lock();
        if users.values().any(|(u, _)| u.nickname == user.nickname) {
            return Err(DomainError::NicknameTaken);
        }
        users.insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn list(&self, filter: UserFilter) -> RepoResult<Vec<User>> {
        let mut users: Vec<User> = self
            .store
            .users
            .lock()
            .values()
            .map(|(u, _)| u.clone())
            .filter(|u| filter.role.is_none_or(|r| u.role == r))
            .filter(|u| filter.status.is_none_or(|s| u.status == s))
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update_role(&self, id: Uuid, role: Role) -> RepoResult<()> {
        let mut users = self.store.users.lock();
        let (user, _) = users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        user.role = role;
        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: UserStatus) -> RepoResult<()> {
        let mut users = self.store.users.lock();
        let (user, _) = users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        user.status = status;
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        must_change_password: bool,
    ) -> RepoResult<()> {
        let mut users = self.store.users.lock();
        let (user, hash) = users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        *hash = password_hash.to_string();
        user.must_change_password = must_change_password;
        Ok(())
    }

    async fn update_contact(
        &self,
        id: Uuid,
        discord_tag: Option<String>,
        email: Option<String>,
    ) -> RepoResult<()> {
        let mut users = self.store.users.lock();
        let (user, _) = users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        if let Some(tag) = discord_tag {
            user.discord_tag = tag;
        }
        if let Some(email) = email {
            user.email = Some(email);
        }
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        Ok(self.store.users.lock().get(&id).map(|(_, h)| h.clone()))
    }
}

// ============================================================================
// Goals
// ============================================================================

pub struct FakeGoalRepository {
    store: Arc<InMemoryStore>,
}

impl FakeGoalRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GoalRepository for FakeGoalRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Goal>> {
        Ok(self.store.goals.lock().get(&id).cloned())
    }

    async fn list(&self, filter: GoalFilter) -> RepoResult<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .store
            .goals
            .lock()
            .values()
            .cloned()
            .filter(|g| filter.status.is_none_or(|s| g.status == s))
            .filter(|g| filter.visibility.is_none_or(|v| g.visibility == v))
            .filter(|g| filter.scope.is_none_or(|s| g.scope == s))
            .collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(goals)
    }

    async fn create(&self, goal: &Goal) -> RepoResult<()> {
        self.store.goals.lock().insert(goal.id, goal.clone());
        Ok(())
    }

    async fn update(&self, goal: &Goal) -> RepoResult<()> {
        let mut goals = self.store.goals.lock();
        if !goals.contains_key(&goal.id) {
            return Err(DomainError::GoalNotFound(goal.id));
        }
        goals.insert(goal.id, goal.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.store
            .goals
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::GoalNotFound(id))
    }
}

// ============================================================================
// Goal submissions
// ============================================================================

pub struct FakeGoalSubmissionRepository {
    store: Arc<InMemoryStore>,
}

impl FakeGoalSubmissionRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GoalSubmissionRepository for FakeGoalSubmissionRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<GoalSubmission>> {
        Ok(self.store.submissions.lock().get(&id).cloned())
    }

    async fn create(&self, submission: &GoalSubmission) -> RepoResult<()> {
        self.store
            .submissions
            .lock()
            .insert(submission.id, submission.clone());
        Ok(())
    }

    async fn create_reviewed(
        &self,
        submission: &GoalSubmission,
        award: Option<(StatsDelta, NaiveDate)>,
    ) -> RepoResult<()> {
        self.store
            .submissions
            .lock()
            .insert(submission.id, submission.clone());
        if let Some((delta, date)) = award {
            self.store.bump_stats(submission.submitted_by, date, delta);
        }
        Ok(())
    }

    async fn list(&self, filter: SubmissionFilter) -> RepoResult<Vec<GoalSubmission>> {
        let mut list: Vec<GoalSubmission> = self
            .store
            .submissions
            .lock()
            .values()
            .cloned()
            .filter(|s| filter.status.is_none_or(|st| s.status == st))
            .filter(|s| filter.goal_id.is_none_or(|g| s.goal_id == g))
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn list_by_submitter(&self, user_id: Uuid) -> RepoResult<Vec<GoalSubmission>> {
        let mut list: Vec<GoalSubmission> = self
            .store
            .submissions
            .lock()
            .values()
            .cloned()
            .filter(|s| s.submitted_by == user_id)
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn approve(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        award: StatsDelta,
        today: UtcDay,
        enforce_daily_unique: bool,
    ) -> RepoResult<()> {
        let mut submissions = self.store.submissions.lock();
        let current = submissions
            .get(&id)
            .cloned()
            .ok_or(DomainError::SubmissionNotFound(id))?;

        if current.status != SubmissionStatus::Pending {
            return Err(DomainError::AlreadyReviewed);
        }

        if enforce_daily_unique {
            let duplicate = submissions.values().any(|s| {
                s.goal_id == current.goal_id
                    && s.submitted_by == current.submitted_by
                    && s.status == SubmissionStatus::Approved
                    && today.contains(s.created_at)
            });
            if duplicate {
                return Err(DomainError::AlreadyCompletedToday);
            }
        }

        let entry = submissions.get_mut(&id).expect("checked above");
        entry.status = SubmissionStatus::Approved;
        entry.reviewed_by = Some(reviewer_id);
        entry.reviewed_at = Some(chrono::Utc::now());
        drop(submissions);

        self.store.bump_stats(current.submitted_by, today.date(), award);
        Ok(())
    }

    async fn reject(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        reason: Option<String>,
    ) -> RepoResult<()> {
        let mut submissions = self.store.submissions.lock();
        let entry = submissions
            .get_mut(&id)
            .ok_or(DomainError::SubmissionNotFound(id))?;

        if entry.status != SubmissionStatus::Pending {
            return Err(DomainError::AlreadyReviewed);
        }

        entry.status = SubmissionStatus::Rejected;
        entry.reviewed_by = Some(reviewer_id);
        entry.reviewed_at = Some(chrono::Utc::now());
        entry.rejection_reason = reason;
        Ok(())
    }

    async fn delete(&self, id: Uuid, reversal: StatsDelta) -> RepoResult<GoalSubmission> {
        let removed = {
            let mut submissions = self.store.submissions.lock();
            submissions
                .remove(&id)
                .ok_or(DomainError::SubmissionNotFound(id))?
        };

        if removed.status == SubmissionStatus::Approved {
            self.store.reverse_stats(
                removed.submitted_by,
                removed.created_at.date_naive(),
                reversal,
            );
        }

        self.store
            .uploads
            .lock()
            .retain(|_, u| u.goal_submission_id != Some(id));

        Ok(removed)
    }

    async fn approved_amount_total(&self, goal_id: Uuid) -> RepoResult<i64> {
        Ok(self
            .store
            .submissions
            .lock()
            .values()
            .filter(|s| s.goal_id == goal_id && s.status == SubmissionStatus::Approved)
            .filter_map(|s| s.amount)
            .sum())
    }
}

// ============================================================================
// Assignments
// ============================================================================

pub struct FakeAssignmentRepository {
    store: Arc<InMemoryStore>,
}

impl FakeAssignmentRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AssignmentRepository for FakeAssignmentRepository {
    async fn create_with_assignees(
        &self,
        assignment: &Assignment,
        assignee_ids: &[Uuid],
    ) -> RepoResult<()> {
        self.store
            .assignments
            .lock()
            .insert(assignment.id, assignment.clone());

        let mut rows = self.store.assignment_submissions.lock();
        for &user_id in assignee_ids {
            let row = AssignmentSubmission::open(Uuid::new_v4(), assignment.id, user_id);
            rows.insert(row.id, row);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Assignment>> {
        Ok(self.store.assignments.lock().get(&id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Assignment>> {
        let mut list: Vec<Assignment> = self.store.assignments.lock().values().cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn status_counts(&self) -> RepoResult<Vec<AssignmentStatusCounts>> {
        let rows = self.store.assignment_submissions.lock();
        let mut counts: Vec<AssignmentStatusCounts> = Vec::new();
        for row in rows.values() {
            let entry = match counts
                .iter_mut()
                .find(|c| c.assignment_id == row.assignment_id)
            {
                Some(entry) => entry,
                None => {
                    counts.push(AssignmentStatusCounts {
                        assignment_id: row.assignment_id,
                        ..AssignmentStatusCounts::default()
                    });
                    counts.last_mut().expect("just pushed")
                }
            };
            match row.status {
                AssignmentSubmissionStatus::Open => entry.open += 1,
                AssignmentSubmissionStatus::Submitted => entry.submitted += 1,
                AssignmentSubmissionStatus::Approved => entry.approved += 1,
                AssignmentSubmissionStatus::Rejected => entry.rejected += 1,
            }
        }
        Ok(counts)
    }

    async fn find_submission(&self, id: Uuid) -> RepoResult<Option<AssignmentSubmission>> {
        Ok(self.store.assignment_submissions.lock().get(&id).cloned())
    }

    async fn find_submission_for(
        &self,
        assignment_id: Uuid,
        user_id: Uuid,
    ) -> RepoResult<Option<AssignmentSubmission>> {
        Ok(self
            .store
            .assignment_submissions
            .lock()
            .values()
            .find(|s| s.assignment_id == assignment_id && s.user_id == user_id)
            .cloned())
    }

    async fn list_submissions_by_status(
        &self,
        status: AssignmentSubmissionStatus,
    ) -> RepoResult<Vec<AssignmentSubmission>> {
        let mut list: Vec<AssignmentSubmission> = self
            .store
            .assignment_submissions
            .lock()
            .values()
            .cloned()
            .filter(|s| s.status == status)
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn list_active_for_user(&self, user_id: Uuid) -> RepoResult<Vec<AssignmentSubmission>> {
        let mut list: Vec<AssignmentSubmission> = self
            .store
            .assignment_submissions
            .lock()
            .values()
            .cloned()
            .filter(|s| s.user_id == user_id && s.status.is_active())
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn submit(
        &self,
        assignment_id: Uuid,
        user_id: Uuid,
        explanation: String,
        evidence_url: String,
    ) -> RepoResult<AssignmentSubmission> {
        let mut rows = self.store.assignment_submissions.lock();
        let row = rows
            .values_mut()
            .find(|s| s.assignment_id == assignment_id && s.user_id == user_id)
            .ok_or(DomainError::AssignmentNotFound(assignment_id))?;

        row.status = AssignmentSubmissionStatus::Submitted;
        row.explanation = Some(explanation);
        row.evidence_url = Some(evidence_url);
        row.submitted_at = Some(chrono::Utc::now());
        Ok(row.clone())
    }

    async fn approve_submission(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
    ) -> RepoResult<AssignmentSubmission> {
        let mut rows = self.store.assignment_submissions.lock();
        let row = rows.get_mut(&id).ok_or(DomainError::AssignmentNotFound(id))?;
        if row.status != AssignmentSubmissionStatus::Submitted {
            return Err(DomainError::NotInSubmittedState);
        }
        row.status = AssignmentSubmissionStatus::Approved;
        row.reviewed_by = Some(reviewer_id);
        row.reviewed_at = Some(chrono::Utc::now());
        Ok(row.clone())
    }

    async fn reject_submission(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
    ) -> RepoResult<AssignmentSubmission> {
        let mut rows = self.store.assignment_submissions.lock();
        let row = rows.get_mut(&id).ok_or(DomainError::AssignmentNotFound(id))?;
        if row.status != AssignmentSubmissionStatus::Submitted {
            return Err(DomainError::NotInSubmittedState);
        }
        row.status = AssignmentSubmissionStatus::Rejected;
        row.reviewed_by = Some(reviewer_id);
        row.reviewed_at = Some(chrono::Utc::now());
        Ok(row.clone())
    }

    async fn delete_submission(&self, id: Uuid) -> RepoResult<()> {
        self.store
            .assignment_submissions
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::AssignmentNotFound(id))
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let removed = self.store.assignments.lock().remove(&id);
        if removed.is_none() {
            return Err(DomainError::AssignmentNotFound(id));
        }
        self.store
            .assignment_submissions
            .lock()
            .retain(|_, s| s.assignment_id != id);
        Ok(())
    }
}

// ============================================================================
// Recruitment applications
// ============================================================================

pub struct FakeApplicationRepository {
    store: Arc<InMemoryStore>,
}

impl FakeApplicationRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ApplicationRepository for FakeApplicationRepository {
    async fn create(&self, application: &RecruitmentApplication) -> RepoResult<()> {
        self.store
            .applications
            .lock()
            .insert(application.id, application.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<RecruitmentApplication>> {
        Ok(self.store.applications.lock().get(&id).cloned())
    }

    async fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> RepoResult<Vec<RecruitmentApplication>> {
        let mut list: Vec<RecruitmentApplication> = self
            .store
            .applications
            .lock()
            .values()
            .cloned()
            .filter(|a| a.status == status)
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn accept(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        user: &User,
        password_hash: &str,
    ) -> RepoResult<()> {
        // Validate everything before mutating anything: the CAS on the
        // application status, then the nickname uniqueness of the new user
        let mut applications = self.store.applications.lock();
        let application = applications
            .get_mut(&id)
            .ok_or(DomainError::ApplicationNotFound(id))?;

        if application.status != ApplicationStatus::Pending {
            return Err(DomainError::AlreadyReviewed);
        }

        let mut users = self.store.users.lock();
        if users.values().any(|(u, _)| u.nickname == user.nickname) {
            return Err(DomainError::NicknameTaken);
        }

        application.status = ApplicationStatus::Accepted;
        application.reviewed_by = Some(reviewer_id);
        application.reviewed_at = Some(chrono::Utc::now());
        application.accepted_user_id = Some(user.id);

        users.insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn reject(&self, id: Uuid, reviewer_id: Uuid) -> RepoResult<()> {
        let mut applications = self.store.applications.lock();
        let application = applications
            .get_mut(&id)
            .ok_or(DomainError::ApplicationNotFound(id))?;

        if application.status != ApplicationStatus::Pending {
            return Err(DomainError::AlreadyReviewed);
        }

        application.status = ApplicationStatus::Rejected;
        application.reviewed_by = Some(reviewer_id);
        application.reviewed_at = Some(chrono::Utc::now());
        Ok(())
    }
}

// ============================================================================
// Stats, uploads, notifications, audit
// ============================================================================

pub struct FakeUserStatsRepository {
    store: Arc<InMemoryStore>,
}

impl FakeUserStatsRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserStatsRepository for FakeUserStatsRepository {
    async fn find(&self, user_id: Uuid, snapshot_date: NaiveDate) -> RepoResult<Option<UserStats>> {
        Ok(self.store.stats.lock().get(&(user_id, snapshot_date)).cloned())
    }

    async fn totals(&self) -> RepoResult<Vec<UserTotals>> {
        let stats = self.store.stats.lock();
        let mut totals: Vec<UserTotals> = Vec::new();
        for row in stats.values() {
            let entry = match totals.iter_mut().find(|t| t.user_id == row.user_id) {
                Some(entry) => entry,
                None => {
                    totals.push(UserTotals {
                        user_id: row.user_id,
                        ..UserTotals::default()
                    });
                    totals.last_mut().expect("just pushed")
                }
            };
            entry.goals_completed += i64::from(row.goals_completed);
            entry.rank_points += i64::from(row.rank_points);
            entry.daily_goals_points += i64::from(row.daily_goals_points);
            entry.clan_contrib_approved_count += i64::from(row.clan_contrib_approved_count);
        }
        Ok(totals)
    }
}

pub struct FakeUploadRepository {
    store: Arc<InMemoryStore>,
}

impl FakeUploadRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UploadRepository for FakeUploadRepository {
    async fn create_many(&self, uploads: &[Upload]) -> RepoResult<()> {
        let mut map = self.store.uploads.lock();
        for upload in uploads {
            map.insert(upload.id, upload.clone());
        }
        Ok(())
    }

    async fn list_by_submission(&self, submission_id: Uuid) -> RepoResult<Vec<Upload>> {
        Ok(self
            .store
            .uploads
            .lock()
            .values()
            .cloned()
            .filter(|u| u.goal_submission_id == Some(submission_id))
            .collect())
    }

    async fn count_for_submission(&self, submission_id: Uuid) -> RepoResult<i64> {
        Ok(self
            .store
            .uploads
            .lock()
            .values()
            .filter(|u| u.goal_submission_id == Some(submission_id))
            .count() as i64)
    }
}

pub struct FakeNotificationRepository {
    store: Arc<InMemoryStore>,
}

impl FakeNotificationRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl NotificationRepository for FakeNotificationRepository {
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        self.store
            .notifications
            .lock()
            .insert(notification.id, notification.clone());
        Ok(())
    }

    async fn list_for(&self, recipient_id: Uuid) -> RepoResult<Vec<Notification>> {
        let mut list: Vec<Notification> = self
            .store
            .notifications
            .lock()
            .values()
            .cloned()
            .filter(|n| n.recipient_id == recipient_id)
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> RepoResult<()> {
        let mut notifications = self.store.notifications.lock();
        match notifications.get_mut(&id) {
            Some(n) if n.recipient_id == recipient_id => {
                n.read = true;
                Ok(())
            }
            _ => Err(DomainError::NotificationNotFound(id)),
        }
    }
}

pub struct FakeAuditLogRepository {
    store: Arc<InMemoryStore>,
}

impl FakeAuditLogRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuditLogRepository for FakeAuditLogRepository {
    async fn append(&self, entry: &AuditEntry) -> RepoResult<()> {
        self.store.audit.lock().push(entry.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> RepoResult<Vec<AuditEntry>> {
        let audit = self.store.audit.lock();
        let mut list: Vec<AuditEntry> = audit.iter().rev().cloned().collect();
        list.truncate(usize::try_from(limit.max(0)).unwrap_or(0));
        Ok(list)
    }
}
