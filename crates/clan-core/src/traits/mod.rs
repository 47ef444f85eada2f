//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ApplicationRepository, AssignmentRepository, AssignmentStatusCounts, AuditLogRepository,
    GoalFilter, GoalRepository, GoalSubmissionRepository, NotificationRepository, RepoResult,
    SubmissionFilter, UploadRepository, UserFilter, UserRepository, UserStatsRepository,
    UserTotals,
};
