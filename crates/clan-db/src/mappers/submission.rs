//! Goal submission entity <-> model mapper

use clan_core::entities::{GoalSubmission, SubmissionStatus};

use crate::models::GoalSubmissionModel;

impl From<GoalSubmissionModel> for GoalSubmission {
    fn from(model: GoalSubmissionModel) -> Self {
        GoalSubmission {
            id: model.id,
            goal_id: model.goal_id,
            submitted_by: model.submitted_by,
            amount: model.amount,
            note: model.note,
            evidence_url: model.evidence_url,
            status: SubmissionStatus::parse(&model.status).unwrap_or_default(),
            reviewed_by: model.reviewed_by,
            reviewed_at: model.reviewed_at,
            rejection_reason: model.rejection_reason,
            created_at: model.created_at,
        }
    }
}
