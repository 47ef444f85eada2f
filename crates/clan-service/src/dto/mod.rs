//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AdminCreateSubmissionRequest, ChangePasswordRequest, CreateAssignmentRequest,
    CreateGoalRequest, CreateSubmissionRequest, CreateUserRequest, EvidenceFileRequest,
    LoginRequest, RejectRequest, SubmitApplicationRequest, SubmitAssignmentRequest,
    UpdateGoalRequest, UpdateMeRequest, UpdateRoleRequest, UpdateStatusRequest,
};

// Re-export commonly used response types
pub use responses::{
    AcceptedApplicationResponse, ApplicationReceivedResponse, ApplicationResponse,
    ApplicationSummaryResponse, AssignmentCounts, AssignmentResponse,
    AssignmentSubmissionDetailResponse, AssignmentSubmissionResponse,
    AssignmentWithCountsResponse, AuditEntryResponse, ChallengeResponse, CreatedUserResponse,
    GoalProgressResponse, GoalResponse, LeaderboardEntry, LeaderboardResponse, LoginResponse,
    NotificationResponse, ProfileResponse, SubmissionDetailResponse, SubmissionResponse,
    UploadResponse, UserResponse, UserSummary,
};
