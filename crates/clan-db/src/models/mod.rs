//! Database models - one `FromRow` struct per table

mod application;
mod assignment;
mod audit_log;
mod goal;
mod notification;
mod stats;
mod submission;
mod upload;
mod user;

pub use application::RecruitmentApplicationModel;
pub use assignment::{AssignmentModel, AssignmentSubmissionModel};
pub use audit_log::AuditLogModel;
pub use goal::GoalModel;
pub use notification::NotificationModel;
pub use stats::UserStatsModel;
pub use submission::GoalSubmissionModel;
pub use upload::UploadModel;
pub use user::UserModel;
