//! PostgreSQL implementation of GoalSubmissionRepository
//!
//! Review mutations run as single transactions: the status transition, the
//! daily-uniqueness guard, and the stats upsert commit or roll back
//! together. Counter updates go through `ON CONFLICT ... DO UPDATE`
//! increments so concurrent approvals for the same member/day never lose
//! updates.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use clan_core::entities::GoalSubmission;
use clan_core::error::DomainError;
use clan_core::traits::{GoalSubmissionRepository, RepoResult, SubmissionFilter};
use clan_core::value_objects::{StatsDelta, UtcDay};

use crate::models::GoalSubmissionModel;

use super::error::map_db_error;

const SUBMISSION_COLUMNS: &str = "id, goal_id, submitted_by, amount, note, evidence_url, \
     status, reviewed_by, reviewed_at, rejection_reason, created_at";

/// PostgreSQL implementation of GoalSubmissionRepository
#[derive(Clone)]
pub struct PgGoalSubmissionRepository {
    pool: PgPool,
}

impl PgGoalSubmissionRepository {
    /// Create a new PgGoalSubmissionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock and load one submission row inside a transaction
    async fn lock_row(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Option<GoalSubmissionModel>, DomainError> {
        sqlx::query_as::<_, GoalSubmissionModel>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM goal_submissions WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)
    }

    /// Add a delta to a member's snapshot row, inserting it when absent.
    /// Single-statement upsert so concurrent approvals serialize on the
    /// (user_id, snapshot_date) unique key.
    async fn apply_award(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        snapshot_date: NaiveDate,
        delta: StatsDelta,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_stats
                (id, user_id, snapshot_date, goals_completed, rank_points,
                 daily_goals_points, clan_contrib_approved_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id, snapshot_date) DO UPDATE SET
                goals_completed = user_stats.goals_completed + EXCLUDED.goals_completed,
                rank_points = user_stats.rank_points + EXCLUDED.rank_points,
                daily_goals_points = user_stats.daily_goals_points + EXCLUDED.daily_goals_points,
                clan_contrib_approved_count =
                    user_stats.clan_contrib_approved_count + EXCLUDED.clan_contrib_approved_count
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(snapshot_date)
        .bind(delta.goals_completed)
        .bind(delta.rank_points)
        .bind(delta.daily_goals_points)
        .bind(delta.clan_contrib_approved_count)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    /// Subtract a delta from an existing snapshot row, flooring each
    /// counter at zero. A missing row means there is nothing to reverse.
    async fn apply_reversal(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        snapshot_date: NaiveDate,
        delta: StatsDelta,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE user_stats SET
                goals_completed = GREATEST(0, goals_completed - $3),
                rank_points = GREATEST(0, rank_points - $4),
                daily_goals_points = GREATEST(0, daily_goals_points - $5),
                clan_contrib_approved_count = GREATEST(0, clan_contrib_approved_count - $6)
            WHERE user_id = $1 AND snapshot_date = $2
            "#,
        )
        .bind(user_id)
        .bind(snapshot_date)
        .bind(delta.goals_completed)
        .bind(delta.rank_points)
        .bind(delta.daily_goals_points)
        .bind(delta.clan_contrib_approved_count)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl GoalSubmissionRepository for PgGoalSubmissionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<GoalSubmission>> {
        let result = sqlx::query_as::<_, GoalSubmissionModel>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM goal_submissions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GoalSubmission::from))
    }

    #[instrument(skip(self, submission))]
    async fn create(&self, submission: &GoalSubmission) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO goal_submissions
                (id, goal_id, submitted_by, amount, note, evidence_url, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(submission.id)
        .bind(submission.goal_id)
        .bind(submission.submitted_by)
        .bind(submission.amount)
        .bind(&submission.note)
        .bind(&submission.evidence_url)
        .bind(submission.status.as_str())
        .bind(submission.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, submission, award))]
    async fn create_reviewed(
        &self,
        submission: &GoalSubmission,
        award: Option<(StatsDelta, NaiveDate)>,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO goal_submissions
                (id, goal_id, submitted_by, amount, note, evidence_url, status,
                 reviewed_by, reviewed_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(submission.id)
        .bind(submission.goal_id)
        .bind(submission.submitted_by)
        .bind(submission.amount)
        .bind(&submission.note)
        .bind(&submission.evidence_url)
        .bind(submission.status.as_str())
        .bind(submission.reviewed_by)
        .bind(submission.reviewed_at)
        .bind(submission.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if let Some((delta, snapshot_date)) = award {
            Self::apply_award(&mut tx, submission.submitted_by, snapshot_date, delta).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: SubmissionFilter) -> RepoResult<Vec<GoalSubmission>> {
        let results = sqlx::query_as::<_, GoalSubmissionModel>(&format!(
            r#"
            SELECT {SUBMISSION_COLUMNS} FROM goal_submissions
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::UUID IS NULL OR goal_id = $2)
            ORDER BY created_at DESC
            "#
        ))
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.goal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GoalSubmission::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_submitter(&self, user_id: Uuid) -> RepoResult<Vec<GoalSubmission>> {
        let results = sqlx::query_as::<_, GoalSubmissionModel>(&format!(
            r#"
            SELECT {SUBMISSION_COLUMNS} FROM goal_submissions
            WHERE submitted_by = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GoalSubmission::from).collect())
    }

    #[instrument(skip(self, award))]
    async fn approve(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        award: StatsDelta,
        today: UtcDay,
        enforce_daily_unique: bool,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = Self::lock_row(&mut tx, id)
            .await?
            .ok_or(DomainError::SubmissionNotFound(id))?;

        if row.status != "PENDING" {
            return Err(DomainError::AlreadyReviewed);
        }

        if enforce_daily_unique {
            let already = sqlx::query_scalar::<_, bool>(
                r#"
                SELECT EXISTS(
                    SELECT 1 FROM goal_submissions
                    WHERE goal_id = $1 AND submitted_by = $2 AND status = 'APPROVED'
                      AND created_at >= $3 AND created_at < $4
                )
                "#,
            )
            .bind(row.goal_id)
            .bind(row.submitted_by)
            .bind(today.start())
            .bind(today.end())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if already {
                return Err(DomainError::AlreadyCompletedToday);
            }
        }

        sqlx::query(
            r#"
            UPDATE goal_submissions
            SET status = 'APPROVED', reviewed_by = $2, reviewed_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(reviewer_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        Self::apply_award(&mut tx, row.submitted_by, today.date(), award).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn reject(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        reason: Option<String>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE goal_submissions
            SET status = 'REJECTED', reviewed_by = $2, reviewed_at = NOW(), rejection_reason = $3
            WHERE id = $1 AND status = 'PENDING'
            "#,
        )
        .bind(id)
        .bind(reviewer_id)
        .bind(reason)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            // Distinguish a missing row from one already reviewed
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM goal_submissions WHERE id = $1)",
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::AlreadyReviewed
            } else {
                DomainError::SubmissionNotFound(id)
            });
        }

        Ok(())
    }

    #[instrument(skip(self, reversal))]
    async fn delete(&self, id: Uuid, reversal: StatsDelta) -> RepoResult<GoalSubmission> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = Self::lock_row(&mut tx, id)
            .await?
            .ok_or(DomainError::SubmissionNotFound(id))?;

        if row.status == "APPROVED" {
            // Reverse on the row keyed by the submission's original creation day
            let snapshot_date = row.created_at.date_naive();
            Self::apply_reversal(&mut tx, row.submitted_by, snapshot_date, reversal).await?;
        }

        sqlx::query("DELETE FROM uploads WHERE goal_submission_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM goal_submissions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(GoalSubmission::from(row))
    }

    #[instrument(skip(self))]
    async fn approved_amount_total(&self, goal_id: Uuid) -> RepoResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(amount), 0)::BIGINT FROM goal_submissions
            WHERE goal_id = $1 AND status = 'APPROVED'
            "#,
        )
        .bind(goal_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(total)
    }
}
