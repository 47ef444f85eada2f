//! PostgreSQL implementation of GoalRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use clan_core::entities::{Goal, GoalScope, GoalStatus, GoalVisibility};
use clan_core::error::DomainError;
use clan_core::traits::{GoalFilter, GoalRepository, RepoResult};

use crate::models::GoalModel;

use super::error::map_db_error;

const GOAL_COLUMNS: &str = "id, title, description, scope, target_amount, unit, status, \
     visibility, starts_at, ends_at, created_by, created_at, updated_at";

/// PostgreSQL implementation of GoalRepository
#[derive(Clone)]
pub struct PgGoalRepository {
    pool: PgPool,
}

impl PgGoalRepository {
    /// Create a new PgGoalRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PgGoalRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Goal>> {
        let result = sqlx::query_as::<_, GoalModel>(&format!(
            "SELECT {GOAL_COLUMNS} FROM goals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Goal::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: GoalFilter) -> RepoResult<Vec<Goal>> {
        let results = sqlx::query_as::<_, GoalModel>(&format!(
            r#"
            SELECT {GOAL_COLUMNS} FROM goals
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::TEXT IS NULL OR visibility = $2)
              AND ($3::TEXT IS NULL OR scope = $3)
            ORDER BY created_at DESC
            "#
        ))
        .bind(filter.status.map(GoalStatus::as_str))
        .bind(filter.visibility.map(GoalVisibility::as_str))
        .bind(filter.scope.map(GoalScope::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Goal::from).collect())
    }

    #[instrument(skip(self, goal))]
    async fn create(&self, goal: &Goal) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO goals
                (id, title, description, scope, target_amount, unit, status, visibility,
                 starts_at, ends_at, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(goal.id)
        .bind(&goal.title)
        .bind(&goal.description)
        .bind(goal.scope.as_str())
        .bind(goal.target_amount)
        .bind(&goal.unit)
        .bind(goal.status.as_str())
        .bind(goal.visibility.as_str())
        .bind(goal.starts_at)
        .bind(goal.ends_at)
        .bind(goal.created_by)
        .bind(goal.created_at)
        .bind(goal.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, goal))]
    async fn update(&self, goal: &Goal) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE goals
            SET title = $2, description = $3, scope = $4, target_amount = $5, unit = $6,
                status = $7, visibility = $8, starts_at = $9, ends_at = $10, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(goal.id)
        .bind(&goal.title)
        .bind(&goal.description)
        .bind(goal.scope.as_str())
        .bind(goal.target_amount)
        .bind(&goal.unit)
        .bind(goal.status.as_str())
        .bind(goal.visibility.as_str())
        .bind(goal.starts_at)
        .bind(goal.ends_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GoalNotFound(goal.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GoalNotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgGoalRepository>();
    }
}
