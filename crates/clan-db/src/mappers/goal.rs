//! Goal entity <-> model mapper

use clan_core::entities::{Goal, GoalScope, GoalStatus, GoalVisibility};

use crate::models::GoalModel;

impl From<GoalModel> for Goal {
    fn from(model: GoalModel) -> Self {
        Goal {
            id: model.id,
            title: model.title,
            description: model.description,
            scope: GoalScope::parse(&model.scope).unwrap_or_default(),
            target_amount: model.target_amount,
            unit: model.unit,
            status: GoalStatus::parse(&model.status).unwrap_or_default(),
            visibility: GoalVisibility::parse(&model.visibility).unwrap_or_default(),
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
