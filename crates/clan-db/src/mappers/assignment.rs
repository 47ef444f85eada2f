//! Assignment entity <-> model mappers

use clan_core::entities::{Assignment, AssignmentSubmission, AssignmentSubmissionStatus};

use crate::models::{AssignmentModel, AssignmentSubmissionModel};

impl From<AssignmentModel> for Assignment {
    fn from(model: AssignmentModel) -> Self {
        Assignment {
            id: model.id,
            title: model.title,
            description: model.description,
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}

impl From<AssignmentSubmissionModel> for AssignmentSubmission {
    fn from(model: AssignmentSubmissionModel) -> Self {
        AssignmentSubmission {
            id: model.id,
            assignment_id: model.assignment_id,
            user_id: model.user_id,
            status: AssignmentSubmissionStatus::parse(&model.status).unwrap_or_default(),
            explanation: model.explanation,
            evidence_url: model.evidence_url,
            submitted_at: model.submitted_at,
            reviewed_by: model.reviewed_by,
            reviewed_at: model.reviewed_at,
            created_at: model.created_at,
        }
    }
}
