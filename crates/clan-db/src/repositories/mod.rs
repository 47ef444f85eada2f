//! PostgreSQL repository implementations

mod application;
mod assignment;
mod audit_log;
mod error;
mod goal;
mod notification;
mod stats;
mod submission;
mod upload;
mod user;

pub use application::PgApplicationRepository;
pub use assignment::PgAssignmentRepository;
pub use audit_log::PgAuditLogRepository;
pub use goal::PgGoalRepository;
pub use notification::PgNotificationRepository;
pub use stats::PgUserStatsRepository;
pub use submission::PgGoalSubmissionRepository;
pub use upload::PgUploadRepository;
pub use user::PgUserRepository;
