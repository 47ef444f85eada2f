//! Goal service
//!
//! Staff-defined targets. Clan-scope progress is always derived from the
//! approved submissions, never cached.

use tracing::{info, instrument};
use uuid::Uuid;

use clan_common::{sanitize_required, sanitize_text};
use clan_core::entities::{Goal, GoalStatus, GoalVisibility};
use clan_core::traits::GoalFilter;

use crate::dto::{CreateGoalRequest, GoalProgressResponse, GoalResponse, UpdateGoalRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Goal service
pub struct GoalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GoalService<'a> {
    /// Create a new GoalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List goals, ACTIVE by default
    #[instrument(skip(self))]
    pub async fn list(&self, filter: GoalFilter) -> ServiceResult<Vec<GoalResponse>> {
        let goals = self.ctx.goal_repo().list(filter).await?;
        Ok(goals.iter().map(GoalResponse::from).collect())
    }

    /// Create a goal
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor_id: Uuid,
        request: CreateGoalRequest,
    ) -> ServiceResult<GoalResponse> {
        let now = chrono::Utc::now();
        let goal = Goal {
            id: Uuid::new_v4(),
            title: sanitize_required(&request.title, 120),
            description: sanitize_required(&request.description, 2000),
            scope: request.scope,
            target_amount: request.target_amount,
            unit: sanitize_text(request.unit.as_deref(), 32),
            status: GoalStatus::Active,
            visibility: request.visibility,
            starts_at: request.starts_at,
            ends_at: request.ends_at,
            created_by: actor_id,
            created_at: now,
            updated_at: now,
        };

        self.ctx.goal_repo().create(&goal).await?;

        info!(goal_id = %goal.id, scope = goal.scope.as_str(), "Goal created");

        Ok(GoalResponse::from(&goal))
    }

    /// Partially update a goal
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: UpdateGoalRequest) -> ServiceResult<GoalResponse> {
        let mut goal = self
            .ctx
            .goal_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Goal", id.to_string()))?;

        if let Some(title) = request.title {
            goal.title = sanitize_required(&title, 120);
        }
        if let Some(description) = request.description {
            goal.description = sanitize_required(&description, 2000);
        }
        if let Some(scope) = request.scope {
            goal.scope = scope;
        }
        if let Some(target_amount) = request.target_amount {
            goal.target_amount = Some(target_amount);
        }
        if let Some(unit) = request.unit {
            goal.unit = sanitize_text(Some(&unit), 32);
        }
        if let Some(starts_at) = request.starts_at {
            goal.starts_at = Some(starts_at);
        }
        if let Some(ends_at) = request.ends_at {
            goal.ends_at = Some(ends_at);
        }
        if let Some(visibility) = request.visibility {
            goal.visibility = visibility;
        }
        if let Some(status) = request.status {
            goal.status = status;
        }
        goal.updated_at = chrono::Utc::now();

        self.ctx.goal_repo().update(&goal).await?;

        info!(goal_id = %id, "Goal updated");

        Ok(GoalResponse::from(&goal))
    }

    /// Delete a goal
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.goal_repo().delete(id).await?;
        info!(goal_id = %id, "Goal deleted");
        Ok(())
    }

    /// Goal with its pooled approved total, derived from the submissions
    #[instrument(skip(self))]
    pub async fn progress(&self, id: Uuid) -> ServiceResult<GoalProgressResponse> {
        let goal = self
            .ctx
            .goal_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Goal", id.to_string()))?;

        let approved_total = self.ctx.submission_repo().approved_amount_total(id).await?;

        Ok(GoalProgressResponse {
            goal: GoalResponse::from(&goal),
            approved_total,
        })
    }

    /// Public goal listing (active, public visibility) for the landing page
    #[instrument(skip(self))]
    pub async fn list_public(&self) -> ServiceResult<Vec<GoalResponse>> {
        let filter = GoalFilter {
            status: Some(GoalStatus::Active),
            visibility: Some(GoalVisibility::Public),
            scope: None,
        };
        let goals = self.ctx.goal_repo().list(filter).await?;
        Ok(goals.iter().map(GoalResponse::from).collect())
    }
}
