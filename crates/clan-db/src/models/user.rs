//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub nickname: String,
    pub discord_tag: String,
    pub email: Option<String>,
    pub password_hash: String,
    /// Role stored as string: LEADER | ELITE | ADMIN | MEMBER
    pub role: String,
    /// Status stored as string: ACTIVE | INACTIVE | BANNED
    pub status: String,
    pub must_change_password: bool,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
