//! # clan-service
//!
//! Application layer: one service per workflow, request/response DTOs, and
//! the dependency container wiring repositories together. Services own the
//! business rules; the repositories own atomicity.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::*;
pub use services::{
    AssignmentService, AuditService, AuthService, DiscordNotifier, GoalService,
    NotificationService, RankingService, RecruitmentService, ServiceContext, ServiceError,
    ServiceResult, SubmissionService, UserService,
};
