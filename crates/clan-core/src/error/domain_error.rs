//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),

    #[error("Submission not found: {0}")]
    SubmissionNotFound(Uuid),

    #[error("Assignment not found: {0}")]
    AssignmentNotFound(Uuid),

    #[error("Application not found: {0}")]
    ApplicationNotFound(Uuid),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Uuid),

    // =========================================================================
    // State Guard Violations
    // =========================================================================
    #[error("Submission has already been reviewed")]
    AlreadyReviewed,

    #[error("Daily goal already completed today")]
    AlreadyCompletedToday,

    #[error("Assignment submission is not in the submitted state")]
    NotInSubmittedState,

    #[error("Evidence is required to approve a submission")]
    EvidenceRequired,

    // =========================================================================
    // Validation & Conflict Errors
    // =========================================================================
    #[error("Challenge verification failed")]
    ChallengeFailed,

    #[error("Nickname already in use")]
    NicknameTaken,

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::GoalNotFound(_) => "UNKNOWN_GOAL",
            Self::SubmissionNotFound(_) => "UNKNOWN_SUBMISSION",
            Self::AssignmentNotFound(_) => "UNKNOWN_ASSIGNMENT",
            Self::ApplicationNotFound(_) => "UNKNOWN_APPLICATION",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // State Guards
            Self::AlreadyReviewed => "ALREADY_REVIEWED",
            Self::AlreadyCompletedToday => "ALREADY_COMPLETED_TODAY",
            Self::NotInSubmittedState => "NOT_IN_SUBMITTED_STATE",
            Self::EvidenceRequired => "EVIDENCE_REQUIRED",

            // Validation & Conflict
            Self::ChallengeFailed => "CHALLENGE_FAILED",
            Self::NicknameTaken => "NICKNAME_TAKEN",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::GoalNotFound(_)
                | Self::SubmissionNotFound(_)
                | Self::AssignmentNotFound(_)
                | Self::ApplicationNotFound(_)
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::EvidenceRequired | Self::ChallengeFailed
        )
    }

    /// Check if this is a conflict on current state (idempotency/ordering guard)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyReviewed
                | Self::AlreadyCompletedToday
                | Self::NotInSubmittedState
                | Self::NicknameTaken
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::SubmissionNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_SUBMISSION");

        assert_eq!(DomainError::AlreadyCompletedToday.code(), "ALREADY_COMPLETED_TODAY");
        assert_eq!(DomainError::EvidenceRequired.code(), "EVIDENCE_REQUIRED");
        assert_eq!(DomainError::ChallengeFailed.code(), "CHALLENGE_FAILED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::GoalNotFound(Uuid::nil()).is_not_found());
        assert!(!DomainError::AlreadyReviewed.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::AlreadyReviewed.is_conflict());
        assert!(DomainError::AlreadyCompletedToday.is_conflict());
        assert!(DomainError::NotInSubmittedState.is_conflict());
        assert!(!DomainError::EvidenceRequired.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::AlreadyCompletedToday;
        assert_eq!(err.to_string(), "Daily goal already completed today");

        let err = DomainError::ValidationError("amount out of range".to_string());
        assert_eq!(err.to_string(), "Validation error: amount out of range");
    }
}
