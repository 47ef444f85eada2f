//! Entity → response DTO mappers

use clan_core::entities::{
    Assignment, AssignmentSubmission, AuditEntry, Goal, GoalSubmission, Notification,
    RecruitmentApplication, Upload, User,
};

use super::responses::{
    ApplicationResponse, ApplicationSummaryResponse, AssignmentResponse,
    AssignmentSubmissionResponse, AuditEntryResponse, GoalResponse, NotificationResponse,
    ProfileResponse, SubmissionResponse, UploadResponse, UserResponse, UserSummary,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname.clone(),
            discord_tag: user.discord_tag.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
            joined_at: user.joined_at,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname.clone(),
            role: user.role,
        }
    }
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname.clone(),
            discord_tag: user.discord_tag.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
            must_change_password: user.must_change_password,
            joined_at: user.joined_at,
            created_at: user.created_at,
        }
    }
}

impl From<&Goal> for GoalResponse {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id,
            title: goal.title.clone(),
            description: goal.description.clone(),
            scope: goal.scope,
            is_daily: goal.is_daily(),
            target_amount: goal.target_amount,
            unit: goal.unit.clone(),
            status: goal.status,
            visibility: goal.visibility,
            starts_at: goal.starts_at,
            ends_at: goal.ends_at,
            created_by: goal.created_by,
            created_at: goal.created_at,
        }
    }
}

impl From<&GoalSubmission> for SubmissionResponse {
    fn from(submission: &GoalSubmission) -> Self {
        Self {
            id: submission.id,
            goal_id: submission.goal_id,
            submitted_by: submission.submitted_by,
            amount: submission.amount,
            note: submission.note.clone(),
            evidence_url: submission.evidence_url.clone(),
            status: submission.status,
            reviewed_by: submission.reviewed_by,
            reviewed_at: submission.reviewed_at,
            rejection_reason: submission.rejection_reason.clone(),
            created_at: submission.created_at,
        }
    }
}

impl From<&Upload> for UploadResponse {
    fn from(upload: &Upload) -> Self {
        Self {
            id: upload.id,
            storage_path: upload.storage_path.clone(),
            mime_type: upload.mime_type.clone(),
            size_bytes: upload.size_bytes,
            created_at: upload.created_at,
        }
    }
}

impl From<&Assignment> for AssignmentResponse {
    fn from(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id,
            title: assignment.title.clone(),
            description: assignment.description.clone(),
            created_by: assignment.created_by,
            created_at: assignment.created_at,
        }
    }
}

impl From<&AssignmentSubmission> for AssignmentSubmissionResponse {
    fn from(submission: &AssignmentSubmission) -> Self {
        Self {
            id: submission.id,
            assignment_id: submission.assignment_id,
            user_id: submission.user_id,
            status: submission.status,
            explanation: submission.explanation.clone(),
            evidence_url: submission.evidence_url.clone(),
            submitted_at: submission.submitted_at,
            reviewed_by: submission.reviewed_by,
            reviewed_at: submission.reviewed_at,
            created_at: submission.created_at,
        }
    }
}

impl From<&RecruitmentApplication> for ApplicationSummaryResponse {
    fn from(application: &RecruitmentApplication) -> Self {
        Self {
            id: application.id,
            nickname: application.nickname.clone(),
            discord_tag: application.discord_tag.clone(),
            status: application.status,
            created_at: application.created_at,
        }
    }
}

impl From<&RecruitmentApplication> for ApplicationResponse {
    fn from(application: &RecruitmentApplication) -> Self {
        Self {
            id: application.id,
            nickname: application.nickname.clone(),
            discord_tag: application.discord_tag.clone(),
            age: application.age,
            region: application.region.clone(),
            game_experience: application.game_experience.clone(),
            highest_rank: application.highest_rank.clone(),
            preferences: application.preferences.clone(),
            weekly_hours: application.weekly_hours,
            prior_clan: application.prior_clan,
            why_left_prior_clan: application.why_left_prior_clan.clone(),
            why_join_us: application.why_join_us.clone(),
            portfolio_links: application.portfolio_links.clone(),
            status: application.status,
            reviewed_by: application.reviewed_by,
            reviewed_at: application.reviewed_at,
            accepted_user_id: application.accepted_user_id,
            created_at: application.created_at,
        }
    }
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind,
            title: notification.title.clone(),
            message: notification.message.clone(),
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

impl From<&AuditEntry> for AuditEntryResponse {
    fn from(entry: &AuditEntry) -> Self {
        Self {
            id: entry.id,
            actor_id: entry.actor_id,
            action: entry.action.clone(),
            entity: entry.entity.clone(),
            entity_id: entry.entity_id,
            metadata: entry.metadata.clone(),
            created_at: entry.created_at,
        }
    }
}
