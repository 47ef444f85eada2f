//! User statistics snapshot - the per-user, per-UTC-day point ledger
//!
//! One row per (user, snapshot date); counters only move through atomic
//! increments applied inside the submission-review transactions, and the
//! ranking views aggregate over rows rather than caching totals.

use chrono::NaiveDate;
use uuid::Uuid;

/// One ledger row; unique on (user_id, snapshot_date)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub id: Uuid,
    pub user_id: Uuid,
    pub snapshot_date: NaiveDate,
    pub goals_completed: i32,
    pub rank_points: i32,
    pub daily_goals_points: i32,
    pub clan_contrib_approved_count: i32,
}

impl UserStats {
    /// A fresh zeroed row for a user/day
    #[must_use]
    pub fn zeroed(id: Uuid, user_id: Uuid, snapshot_date: NaiveDate) -> Self {
        Self {
            id,
            user_id,
            snapshot_date,
            goals_completed: 0,
            rank_points: 0,
            daily_goals_points: 0,
            clan_contrib_approved_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_row() {
        let row = UserStats::zeroed(
            Uuid::new_v4(),
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        );
        assert_eq!(row.goals_completed, 0);
        assert_eq!(row.rank_points, 0);
        assert_eq!(row.daily_goals_points, 0);
        assert_eq!(row.clan_contrib_approved_count, 0);
    }
}
