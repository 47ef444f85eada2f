//! Goal entity - a staff-defined target members submit progress against

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether progress is tracked per member or pooled across the clan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalScope {
    /// Per-member daily goal, completion resets every UTC calendar day
    User,
    /// Shared goal, progress is the sum of approved amounts across members
    #[default]
    Clan,
}

impl GoalScope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Clan => "CLAN",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "USER" => Some(Self::User),
            "CLAN" => Some(Self::Clan),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    #[default]
    Active,
    Paused,
    Archived,
}

impl GoalStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Archived => "ARCHIVED",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "PAUSED" => Some(Self::Paused),
            "ARCHIVED" => Some(Self::Archived),
            _ => None,
        }
    }
}

/// Who may see the goal: everyone, or signed-in members only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalVisibility {
    Public,
    #[default]
    Clan,
}

impl GoalVisibility {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Clan => "CLAN",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PUBLIC" => Some(Self::Public),
            "CLAN" => Some(Self::Clan),
            _ => None,
        }
    }
}

/// Goal entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub scope: GoalScope,
    pub target_amount: Option<i64>,
    pub unit: Option<String>,
    pub status: GoalStatus,
    pub visibility: GoalVisibility,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Daily goals are exactly the per-member ones; completion is evaluated
    /// per UTC calendar day
    #[inline]
    #[must_use]
    pub fn is_daily(&self) -> bool {
        self.scope == GoalScope::User
    }

    /// Whether an approved submission counts toward the pooled clan total
    #[inline]
    #[must_use]
    pub fn is_clan_pooled(&self) -> bool {
        self.scope == GoalScope::Clan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(scope: GoalScope) -> Goal {
        let now = Utc::now();
        Goal {
            id: Uuid::new_v4(),
            title: "Farm iron".to_string(),
            description: "Bring iron ingots to the clan vault".to_string(),
            scope,
            target_amount: Some(10_000),
            unit: Some("ingots".to_string()),
            status: GoalStatus::Active,
            visibility: GoalVisibility::Clan,
            starts_at: None,
            ends_at: None,
            created_by: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_daily_is_derived_from_scope() {
        assert!(goal(GoalScope::User).is_daily());
        assert!(!goal(GoalScope::Clan).is_daily());
    }

    #[test]
    fn test_clan_pooled() {
        assert!(goal(GoalScope::Clan).is_clan_pooled());
        assert!(!goal(GoalScope::User).is_clan_pooled());
    }

    #[test]
    fn test_enum_round_trips() {
        assert_eq!(GoalScope::parse("USER"), Some(GoalScope::User));
        assert_eq!(GoalStatus::parse("PAUSED"), Some(GoalStatus::Paused));
        assert_eq!(GoalVisibility::parse("PUBLIC"), Some(GoalVisibility::Public));
        assert_eq!(GoalScope::parse("GLOBAL"), None);
    }
}
