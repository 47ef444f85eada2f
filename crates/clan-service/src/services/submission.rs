//! Goal submission service
//!
//! Lifecycle of member progress claims: create, approve, reject, delete,
//! plus the privileged admin-create path. Approval and deletion delegate
//! their multi-step mutations to the repository so the status transition
//! and the stats adjustment commit atomically; this service owns the
//! preconditions, the award computation, and the post-commit side effects.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use clan_common::sanitize_text;
use clan_core::entities::{
    GoalSubmission, NotificationKind, SubmissionStatus, Upload,
};
use clan_core::error::DomainError;
use clan_core::traits::SubmissionFilter;
use clan_core::value_objects::{StatsDelta, UtcDay, RANK_POINT_AWARD};

use crate::dto::{
    AdminCreateSubmissionRequest, CreateSubmissionRequest, EvidenceFileRequest, GoalResponse,
    RejectRequest, SubmissionDetailResponse, SubmissionResponse, UploadResponse, UserSummary,
};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Goal submission service
pub struct SubmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionService<'a> {
    /// Create a new SubmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Member creates a PENDING submission with optional evidence
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        submitter_id: Uuid,
        request: CreateSubmissionRequest,
    ) -> ServiceResult<SubmissionResponse> {
        // The goal must exist; its state is otherwise not a precondition
        self.ctx
            .goal_repo()
            .find_by_id(request.goal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Goal", request.goal_id.to_string()))?;

        let submission = GoalSubmission::new(
            Uuid::new_v4(),
            request.goal_id,
            submitter_id,
            request.amount,
            sanitize_text(request.note.as_deref(), 1000),
            request.evidence_url,
        );

        self.ctx.submission_repo().create(&submission).await?;
        self.attach_evidence(submission.id, &request.files).await?;

        info!(submission_id = %submission.id, goal_id = %request.goal_id, "Submission created");

        Ok(SubmissionResponse::from(&submission))
    }

    /// Staff injects a submission directly, possibly pre-approved.
    /// A pre-approved insert awards stats in the same transaction but
    /// deliberately skips the daily-uniqueness check.
    #[instrument(skip(self, request))]
    pub async fn admin_create(
        &self,
        actor_id: Uuid,
        request: AdminCreateSubmissionRequest,
    ) -> ServiceResult<SubmissionResponse> {
        let goal = self
            .ctx
            .goal_repo()
            .find_by_id(request.goal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Goal", request.goal_id.to_string()))?;

        self.ctx
            .user_repo()
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", request.user_id.to_string()))?;

        let mut submission = GoalSubmission::new(
            Uuid::new_v4(),
            request.goal_id,
            request.user_id,
            request.amount,
            sanitize_text(request.note.as_deref(), 1000),
            request.evidence_url,
        );
        submission.status = request.status;

        if request.status == SubmissionStatus::Approved {
            submission.reviewed_by = Some(actor_id);
            submission.reviewed_at = Some(chrono::Utc::now());

            let award = StatsDelta::award_for(&goal);
            self.ctx
                .submission_repo()
                .create_reviewed(&submission, Some((award, UtcDay::today().date())))
                .await?;
        } else {
            self.ctx
                .submission_repo()
                .create_reviewed(&submission, None)
                .await?;
        }

        self.attach_evidence(submission.id, &request.files).await?;

        info!(
            submission_id = %submission.id,
            status = submission.status.as_str(),
            "Submission created by staff"
        );

        Ok(SubmissionResponse::from(&submission))
    }

    /// Approve a PENDING submission
    ///
    /// Preconditions: the submission exists, is PENDING, and carries at
    /// least one evidence artifact. For daily per-member goals, at most one
    /// approval per member per UTC day; the repository re-validates that
    /// guard inside the transaction, so concurrent approvals cannot both
    /// land.
    #[instrument(skip(self))]
    pub async fn approve(&self, id: Uuid, reviewer_id: Uuid) -> ServiceResult<()> {
        let submission = self
            .ctx
            .submission_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Submission", id.to_string()))?;

        if !submission.is_pending() {
            return Err(DomainError::AlreadyReviewed.into());
        }

        let evidence_count = self.ctx.upload_repo().count_for_submission(id).await?;
        if evidence_count == 0 && submission.evidence_url.is_none() {
            return Err(DomainError::EvidenceRequired.into());
        }

        let goal = self
            .ctx
            .goal_repo()
            .find_by_id(submission.goal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Goal", submission.goal_id.to_string()))?;

        let award = StatsDelta::award_for(&goal);
        self.ctx
            .submission_repo()
            .approve(id, reviewer_id, award, UtcDay::today(), goal.is_daily())
            .await?;

        info!(
            submission_id = %id,
            reviewer_id = %reviewer_id,
            rank_points = RANK_POINT_AWARD,
            "Submission approved"
        );

        AuditService::new(self.ctx)
            .log(reviewer_id, "SUBMISSION_APPROVED", "GOAL_SUBMISSION", Some(id), None)
            .await;

        let unit = goal.unit.as_deref().map(|u| format!(" {u}")).unwrap_or_default();
        let message = match submission.amount {
            Some(amount) => format!("Your contribution of {amount}{unit} was approved."),
            None => "Your goal evidence was approved.".to_string(),
        };
        NotificationService::new(self.ctx)
            .notify(
                submission.submitted_by,
                NotificationKind::GoalStatus,
                "Goal approved",
                &message,
            )
            .await;

        Ok(())
    }

    /// Reject a PENDING submission with an optional reason
    #[instrument(skip(self, request))]
    pub async fn reject(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        request: RejectRequest,
    ) -> ServiceResult<()> {
        let submission = self
            .ctx
            .submission_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Submission", id.to_string()))?;

        if !submission.is_pending() {
            return Err(DomainError::AlreadyReviewed.into());
        }

        let reason = sanitize_text(request.reason.as_deref(), 500).filter(|r| !r.is_empty());
        self.ctx
            .submission_repo()
            .reject(id, reviewer_id, reason.clone())
            .await?;

        info!(submission_id = %id, reviewer_id = %reviewer_id, "Submission rejected");

        AuditService::new(self.ctx)
            .log(
                reviewer_id,
                "SUBMISSION_REJECTED",
                "GOAL_SUBMISSION",
                Some(id),
                reason.as_ref().map(|r| serde_json::json!({ "reason": r })),
            )
            .await;

        let message = match &reason {
            Some(reason) => format!("Your contribution was declined. Reason: {reason}"),
            None => "Your contribution was declined.".to_string(),
        };
        NotificationService::new(self.ctx)
            .notify(
                submission.submitted_by,
                NotificationKind::GoalStatus,
                "Goal rejected",
                &message,
            )
            .await;

        Ok(())
    }

    /// Delete a submission of any status; an approved one has its award
    /// reversed on the ledger row of its original creation day, floored at
    /// zero. Stored evidence files are unlinked best-effort before the
    /// transactional delete.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let submission = self
            .ctx
            .submission_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Submission", id.to_string()))?;

        // A deleted goal leaves only the two unconditional counters to reverse
        let reversal = match self.ctx.goal_repo().find_by_id(submission.goal_id).await? {
            Some(goal) => StatsDelta::award_for(&goal),
            None => StatsDelta {
                goals_completed: 1,
                rank_points: RANK_POINT_AWARD,
                ..StatsDelta::default()
            },
        };

        let uploads = self.ctx.upload_repo().list_by_submission(id).await?;
        for upload in &uploads {
            if let Err(e) = tokio::fs::remove_file(&upload.storage_path).await {
                warn!(path = %upload.storage_path, error = %e, "Failed to unlink evidence file");
            }
        }

        let deleted = self.ctx.submission_repo().delete(id, reversal).await?;

        info!(submission_id = %id, status = deleted.status.as_str(), "Submission deleted");

        NotificationService::new(self.ctx)
            .notify(
                deleted.submitted_by,
                NotificationKind::GoalStatus,
                "Contribution removed",
                "Your contribution was removed by the staff. You may submit again.",
            )
            .await;

        Ok(())
    }

    /// Staff review queue, filterable by status and goal
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: SubmissionFilter,
    ) -> ServiceResult<Vec<SubmissionDetailResponse>> {
        let submissions = self.ctx.submission_repo().list(filter).await?;
        self.with_context(submissions, true).await
    }

    /// A member's own submissions
    #[instrument(skip(self))]
    pub async fn mine(&self, user_id: Uuid) -> ServiceResult<Vec<SubmissionDetailResponse>> {
        let submissions = self.ctx.submission_repo().list_by_submitter(user_id).await?;
        self.with_context(submissions, false).await
    }

    async fn attach_evidence(
        &self,
        submission_id: Uuid,
        files: &[EvidenceFileRequest],
    ) -> ServiceResult<()> {
        if files.is_empty() {
            return Ok(());
        }

        let uploads: Vec<Upload> = files
            .iter()
            .map(|f| {
                Upload::evidence(
                    Uuid::new_v4(),
                    submission_id,
                    f.storage_path.clone(),
                    f.mime_type.clone(),
                    f.size_bytes,
                )
            })
            .collect();

        self.ctx.upload_repo().create_many(&uploads).await?;
        Ok(())
    }

    async fn with_context(
        &self,
        submissions: Vec<GoalSubmission>,
        include_submitter: bool,
    ) -> ServiceResult<Vec<SubmissionDetailResponse>> {
        let mut responses = Vec::with_capacity(submissions.len());

        for submission in submissions {
            let goal = self
                .ctx
                .goal_repo()
                .find_by_id(submission.goal_id)
                .await?
                .as_ref()
                .map(GoalResponse::from);

            let submitter = if include_submitter {
                self.ctx
                    .user_repo()
                    .find_by_id(submission.submitted_by)
                    .await?
                    .as_ref()
                    .map(UserSummary::from)
            } else {
                None
            };

            let uploads = self
                .ctx
                .upload_repo()
                .list_by_submission(submission.id)
                .await?
                .iter()
                .map(UploadResponse::from)
                .collect();

            responses.push(SubmissionDetailResponse {
                submission: SubmissionResponse::from(&submission),
                goal,
                submitter,
                uploads,
            });
        }

        Ok(responses)
    }
}
