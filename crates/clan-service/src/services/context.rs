//! Service context - dependency container for services
//!
//! Holds all repositories and shared services the workflow services need.

use std::sync::Arc;

use clan_common::auth::{ChallengeService, JwtService, PasswordService};
use clan_core::traits::{
    ApplicationRepository, AssignmentRepository, AuditLogRepository, GoalRepository,
    GoalSubmissionRepository, NotificationRepository, UploadRepository, UserRepository,
    UserStatsRepository,
};

use super::discord::DiscordNotifier;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Password hashing and JWT issuance
/// - Recruitment challenge tokens
/// - The best-effort outbound Discord notifier
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    goal_repo: Arc<dyn GoalRepository>,
    submission_repo: Arc<dyn GoalSubmissionRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    application_repo: Arc<dyn ApplicationRepository>,
    stats_repo: Arc<dyn UserStatsRepository>,
    upload_repo: Arc<dyn UploadRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    challenge_service: Arc<ChallengeService>,
    password_service: PasswordService,
    discord: Arc<DiscordNotifier>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        goal_repo: Arc<dyn GoalRepository>,
        submission_repo: Arc<dyn GoalSubmissionRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
        application_repo: Arc<dyn ApplicationRepository>,
        stats_repo: Arc<dyn UserStatsRepository>,
        upload_repo: Arc<dyn UploadRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        jwt_service: Arc<JwtService>,
        challenge_service: Arc<ChallengeService>,
        discord: Arc<DiscordNotifier>,
    ) -> Self {
        Self {
            user_repo,
            goal_repo,
            submission_repo,
            assignment_repo,
            application_repo,
            stats_repo,
            upload_repo,
            notification_repo,
            audit_repo,
            jwt_service,
            challenge_service,
            password_service: PasswordService::new(),
            discord,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the goal repository
    pub fn goal_repo(&self) -> &dyn GoalRepository {
        self.goal_repo.as_ref()
    }

    /// Get the goal submission repository
    pub fn submission_repo(&self) -> &dyn GoalSubmissionRepository {
        self.submission_repo.as_ref()
    }

    /// Get the assignment repository
    pub fn assignment_repo(&self) -> &dyn AssignmentRepository {
        self.assignment_repo.as_ref()
    }

    /// Get the recruitment application repository
    pub fn application_repo(&self) -> &dyn ApplicationRepository {
        self.application_repo.as_ref()
    }

    /// Get the user stats repository
    pub fn stats_repo(&self) -> &dyn UserStatsRepository {
        self.stats_repo.as_ref()
    }

    /// Get the upload repository
    pub fn upload_repo(&self) -> &dyn UploadRepository {
        self.upload_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the challenge service
    pub fn challenge_service(&self) -> &ChallengeService {
        self.challenge_service.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Get the Discord notifier
    pub fn discord(&self) -> &DiscordNotifier {
        self.discord.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}
