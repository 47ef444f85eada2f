//! # clan-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `clan-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Every multi-step mutation (approve + stats award, delete + stats
//! reversal, accept + account provisioning, assignment fan-out) runs inside
//! a single database transaction; callers get all-or-nothing semantics.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};

/// Apply the embedded SQL migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
pub use repositories::{
    PgApplicationRepository, PgAssignmentRepository, PgAuditLogRepository, PgGoalRepository,
    PgGoalSubmissionRepository, PgNotificationRepository, PgUploadRepository, PgUserRepository,
    PgUserStatsRepository,
};
