//! User entity - represents a clan member account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Member role, ordered by privilege
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Leader,
    Elite,
    Admin,
    #[default]
    Member,
}

impl Role {
    /// String form matching the stored column value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Leader => "LEADER",
            Self::Elite => "ELITE",
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
        }
    }

    /// Parse from the stored column value
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LEADER" => Some(Self::Leader),
            "ELITE" => Some(Self::Elite),
            "ADMIN" => Some(Self::Admin),
            "MEMBER" => Some(Self::Member),
            _ => None,
        }
    }

    /// Staff roles may review submissions and applications
    #[inline]
    #[must_use]
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Leader | Self::Elite | Self::Admin)
    }
}

/// Account status; accounts are deactivated, never hard-deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Banned,
}

impl UserStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Banned => "BANNED",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "INACTIVE" => Some(Self::Inactive),
            "BANNED" => Some(Self::Banned),
            _ => None,
        }
    }
}

/// User entity representing a clan member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub nickname: String,
    pub discord_tag: String,
    pub email: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub must_change_password: bool,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new member account joining now, with a forced password change
    #[must_use]
    pub fn new_member(id: Uuid, nickname: String, discord_tag: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            nickname,
            discord_tag,
            email: None,
            role: Role::Member,
            status: UserStatus::Active,
            must_change_password: true,
            joined_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the account may log in and act
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Check if the account may review submissions and applications
    #[inline]
    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}
