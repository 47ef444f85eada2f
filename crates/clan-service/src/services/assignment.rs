//! Assignment service
//!
//! Staff-defined tasks fanned out to members. The fan-out bulk insert is
//! part of the creation contract; review transitions are gated on the
//! SUBMITTED state.

use tracing::{info, instrument};
use uuid::Uuid;

use clan_common::{sanitize_required, sanitize_text};
use clan_core::entities::{Assignment, AssignmentSubmissionStatus, NotificationKind};

use crate::dto::{
    AssignmentCounts, AssignmentResponse, AssignmentSubmissionDetailResponse,
    AssignmentSubmissionResponse, AssignmentWithCountsResponse, CreateAssignmentRequest,
    RejectRequest, SubmitAssignmentRequest, UserSummary,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Assignment service
pub struct AssignmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AssignmentService<'a> {
    /// Create a new AssignmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an assignment and eagerly fan out one OPEN submission row per
    /// assignee, in one transaction
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor_id: Uuid,
        request: CreateAssignmentRequest,
    ) -> ServiceResult<AssignmentResponse> {
        if request.assignees.is_empty() {
            return Err(ServiceError::validation("At least one assignee is required"));
        }

        for &user_id in &request.assignees {
            self.ctx
                .user_repo()
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;
        }

        let assignment = Assignment {
            id: Uuid::new_v4(),
            title: sanitize_required(&request.title, 120),
            description: sanitize_required(&request.description, 2000),
            created_by: actor_id,
            created_at: chrono::Utc::now(),
        };

        self.ctx
            .assignment_repo()
            .create_with_assignees(&assignment, &request.assignees)
            .await?;

        info!(
            assignment_id = %assignment.id,
            assignees = request.assignees.len(),
            "Assignment created"
        );

        Ok(AssignmentResponse::from(&assignment))
    }

    /// All assignments with per-status submission tallies
    #[instrument(skip(self))]
    pub async fn list_with_counts(&self) -> ServiceResult<Vec<AssignmentWithCountsResponse>> {
        let assignments = self.ctx.assignment_repo().list().await?;
        let counts = self.ctx.assignment_repo().status_counts().await?;

        Ok(assignments
            .iter()
            .map(|assignment| {
                let tally = counts
                    .iter()
                    .find(|c| c.assignment_id == assignment.id)
                    .map(|c| AssignmentCounts {
                        open: c.open,
                        submitted: c.submitted,
                        approved: c.approved,
                        rejected: c.rejected,
                    })
                    .unwrap_or_default();

                AssignmentWithCountsResponse {
                    assignment: AssignmentResponse::from(assignment),
                    counts: tally,
                }
            })
            .collect())
    }

    /// Review queue: submissions in a given status (SUBMITTED by default)
    #[instrument(skip(self))]
    pub async fn submissions_by_status(
        &self,
        status: AssignmentSubmissionStatus,
    ) -> ServiceResult<Vec<AssignmentSubmissionDetailResponse>> {
        let submissions = self
            .ctx
            .assignment_repo()
            .list_submissions_by_status(status)
            .await?;

        let mut responses = Vec::with_capacity(submissions.len());
        for submission in submissions {
            let assignment = self
                .ctx
                .assignment_repo()
                .find_by_id(submission.assignment_id)
                .await?
                .as_ref()
                .map(AssignmentResponse::from);

            let user = self
                .ctx
                .user_repo()
                .find_by_id(submission.user_id)
                .await?
                .as_ref()
                .map(UserSummary::from);

            responses.push(AssignmentSubmissionDetailResponse {
                submission: AssignmentSubmissionResponse::from(&submission),
                assignment,
                user,
            });
        }

        Ok(responses)
    }

    /// A member's active (OPEN/SUBMITTED) rows with their assignments
    #[instrument(skip(self))]
    pub async fn my_active(
        &self,
        user_id: Uuid,
    ) -> ServiceResult<Vec<AssignmentSubmissionDetailResponse>> {
        let submissions = self.ctx.assignment_repo().list_active_for_user(user_id).await?;

        let mut responses = Vec::with_capacity(submissions.len());
        for submission in submissions {
            let assignment = self
                .ctx
                .assignment_repo()
                .find_by_id(submission.assignment_id)
                .await?
                .as_ref()
                .map(AssignmentResponse::from);

            responses.push(AssignmentSubmissionDetailResponse {
                submission: AssignmentSubmissionResponse::from(&submission),
                assignment,
                user: None,
            });
        }

        Ok(responses)
    }

    /// Member fills in their pre-created row; there is no row to create
    /// here, only the one fanned out at assignment creation
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        assignment_id: Uuid,
        user_id: Uuid,
        request: SubmitAssignmentRequest,
    ) -> ServiceResult<AssignmentSubmissionResponse> {
        let updated = self
            .ctx
            .assignment_repo()
            .submit(
                assignment_id,
                user_id,
                sanitize_required(&request.explanation, 2000),
                request.evidence_url,
            )
            .await?;

        info!(assignment_id = %assignment_id, user_id = %user_id, "Assignment submitted");

        Ok(AssignmentSubmissionResponse::from(&updated))
    }

    /// Approve a SUBMITTED row and notify the assignee
    #[instrument(skip(self))]
    pub async fn approve(&self, submission_id: Uuid, reviewer_id: Uuid) -> ServiceResult<()> {
        let reviewed = self
            .ctx
            .assignment_repo()
            .approve_submission(submission_id, reviewer_id)
            .await?;

        info!(submission_id = %submission_id, reviewer_id = %reviewer_id, "Assignment submission approved");

        NotificationService::new(self.ctx)
            .notify(
                reviewed.user_id,
                NotificationKind::System,
                "Task completed",
                "Your task submission was approved.",
            )
            .await;

        Ok(())
    }

    /// Reject a SUBMITTED row and notify the assignee
    #[instrument(skip(self, request))]
    pub async fn reject(
        &self,
        submission_id: Uuid,
        reviewer_id: Uuid,
        request: RejectRequest,
    ) -> ServiceResult<()> {
        let reviewed = self
            .ctx
            .assignment_repo()
            .reject_submission(submission_id, reviewer_id)
            .await?;

        info!(submission_id = %submission_id, reviewer_id = %reviewer_id, "Assignment submission rejected");

        let reason = sanitize_text(request.reason.as_deref(), 500).filter(|r| !r.is_empty());
        let message = reason.unwrap_or_else(|| "Your task submission was declined.".to_string());
        NotificationService::new(self.ctx)
            .notify(
                reviewed.user_id,
                NotificationKind::System,
                "Task declined",
                &message,
            )
            .await;

        Ok(())
    }

    /// Delete one submission row
    #[instrument(skip(self))]
    pub async fn delete_submission(&self, submission_id: Uuid) -> ServiceResult<()> {
        self.ctx.assignment_repo().delete_submission(submission_id).await?;
        info!(submission_id = %submission_id, "Assignment submission deleted");
        Ok(())
    }

    /// Delete an assignment and all its submission rows
    #[instrument(skip(self))]
    pub async fn delete(&self, assignment_id: Uuid) -> ServiceResult<()> {
        self.ctx.assignment_repo().delete(assignment_id).await?;
        info!(assignment_id = %assignment_id, "Assignment deleted");
        Ok(())
    }
}
