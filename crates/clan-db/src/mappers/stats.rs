//! User stats entity <-> model mapper

use clan_core::entities::UserStats;

use crate::models::UserStatsModel;

impl From<UserStatsModel> for UserStats {
    fn from(model: UserStatsModel) -> Self {
        UserStats {
            id: model.id,
            user_id: model.user_id,
            snapshot_date: model.snapshot_date,
            goals_completed: model.goals_completed,
            rank_points: model.rank_points,
            daily_goals_points: model.daily_goals_points,
            clan_contrib_approved_count: model.clan_contrib_approved_count,
        }
    }
}
