//! Stats delta - the counter adjustments one approval contributes
//!
//! Approval adds the delta to the submitter's snapshot row for today;
//! deleting a previously-approved submission subtracts the same delta from
//! the row of the submission's original creation day, floored at zero.

use crate::entities::Goal;

/// Fixed rank-point award per approved submission
pub const RANK_POINT_AWARD: i32 = 10;

/// Adjustments to the four ledger counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsDelta {
    pub goals_completed: i32,
    pub rank_points: i32,
    pub daily_goals_points: i32,
    pub clan_contrib_approved_count: i32,
}

impl StatsDelta {
    /// The delta one approved submission against this goal is worth
    #[must_use]
    pub fn award_for(goal: &Goal) -> Self {
        Self {
            goals_completed: 1,
            rank_points: RANK_POINT_AWARD,
            daily_goals_points: i32::from(goal.is_daily()),
            clan_contrib_approved_count: i32::from(goal.is_clan_pooled()),
        }
    }

    /// Apply to a counter tuple, flooring each result at zero when negative
    /// deltas are used for reversal
    #[must_use]
    pub fn apply_floored(self, counters: (i32, i32, i32, i32)) -> (i32, i32, i32, i32) {
        (
            (counters.0 + self.goals_completed).max(0),
            (counters.1 + self.rank_points).max(0),
            (counters.2 + self.daily_goals_points).max(0),
            (counters.3 + self.clan_contrib_approved_count).max(0),
        )
    }

    /// The reversal of this delta
    #[must_use]
    pub fn negated(self) -> Self {
        Self {
            goals_completed: -self.goals_completed,
            rank_points: -self.rank_points,
            daily_goals_points: -self.daily_goals_points,
            clan_contrib_approved_count: -self.clan_contrib_approved_count,
        }
    }
}
