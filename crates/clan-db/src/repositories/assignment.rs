//! PostgreSQL implementation of AssignmentRepository
//!
//! Fan-out and cascade deletion are transactional; review transitions are
//! conditional single-statement updates gated on the current status.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use clan_core::entities::{
    Assignment, AssignmentSubmission, AssignmentSubmissionStatus,
};
use clan_core::error::DomainError;
use clan_core::traits::{AssignmentRepository, AssignmentStatusCounts, RepoResult};

use crate::models::{AssignmentModel, AssignmentSubmissionModel};

use super::error::map_db_error;

const SUBMISSION_COLUMNS: &str = "id, assignment_id, user_id, status, explanation, \
     evidence_url, submitted_at, reviewed_by, reviewed_at, created_at";

/// PostgreSQL implementation of AssignmentRepository
#[derive(Clone)]
pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    /// Create a new PgAssignmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Transition one submission row out of SUBMITTED; classifies failures
    /// into not-found vs wrong-state
    async fn review_submission(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        new_status: AssignmentSubmissionStatus,
    ) -> RepoResult<AssignmentSubmission> {
        let updated = sqlx::query_as::<_, AssignmentSubmissionModel>(&format!(
            r#"
            UPDATE assignment_submissions
            SET status = $3, reviewed_by = $2, reviewed_at = NOW()
            WHERE id = $1 AND status = 'SUBMITTED'
            RETURNING {SUBMISSION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(reviewer_id)
        .bind(new_status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match updated {
            Some(model) => Ok(AssignmentSubmission::from(model)),
            None => {
                let exists = sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM assignment_submissions WHERE id = $1)",
                )
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

                Err(if exists {
                    DomainError::NotInSubmittedState
                } else {
                    DomainError::AssignmentNotFound(id)
                })
            }
        }
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    #[instrument(skip(self, assignment, assignee_ids))]
    async fn create_with_assignees(
        &self,
        assignment: &Assignment,
        assignee_ids: &[Uuid],
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO assignments (id, title, description, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(assignment.id)
        .bind(&assignment.title)
        .bind(&assignment.description)
        .bind(assignment.created_by)
        .bind(assignment.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // One OPEN row per assignee, part of the creation contract
        for &user_id in assignee_ids {
            sqlx::query(
                r#"
                INSERT INTO assignment_submissions (id, assignment_id, user_id, status, created_at)
                VALUES ($1, $2, $3, 'OPEN', $4)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(assignment.id)
            .bind(user_id)
            .bind(assignment.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Assignment>> {
        let result = sqlx::query_as::<_, AssignmentModel>(
            "SELECT id, title, description, created_by, created_at FROM assignments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Assignment::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Assignment>> {
        let results = sqlx::query_as::<_, AssignmentModel>(
            r#"
            SELECT id, title, description, created_by, created_at
            FROM assignments
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Assignment::from).collect())
    }

    #[instrument(skip(self))]
    async fn status_counts(&self) -> RepoResult<Vec<AssignmentStatusCounts>> {
        let rows = sqlx::query_as::<_, (Uuid, String, i64)>(
            r#"
            SELECT assignment_id, status, COUNT(*)::BIGINT
            FROM assignment_submissions
            GROUP BY assignment_id, status
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut counts: Vec<AssignmentStatusCounts> = Vec::new();
        for (assignment_id, status, count) in rows {
            let entry = match counts.iter_mut().find(|c| c.assignment_id == assignment_id) {
                Some(entry) => entry,
                None => {
                    counts.push(AssignmentStatusCounts {
                        assignment_id,
                        ..AssignmentStatusCounts::default()
                    });
                    counts.last_mut().expect("just pushed")
                }
            };
            match status.as_str() {
                "OPEN" => entry.open = count,
                "SUBMITTED" => entry.submitted = count,
                "APPROVED" => entry.approved = count,
                "REJECTED" => entry.rejected = count,
                _ => {}
            }
        }

        Ok(counts)
    }

    #[instrument(skip(self))]
    async fn find_submission(&self, id: Uuid) -> RepoResult<Option<AssignmentSubmission>> {
        let result = sqlx::query_as::<_, AssignmentSubmissionModel>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM assignment_submissions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AssignmentSubmission::from))
    }

    #[instrument(skip(self))]
    async fn find_submission_for(
        &self,
        assignment_id: Uuid,
        user_id: Uuid,
    ) -> RepoResult<Option<AssignmentSubmission>> {
        let result = sqlx::query_as::<_, AssignmentSubmissionModel>(&format!(
            r#"
            SELECT {SUBMISSION_COLUMNS} FROM assignment_submissions
            WHERE assignment_id = $1 AND user_id = $2
            "#
        ))
        .bind(assignment_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AssignmentSubmission::from))
    }

    #[instrument(skip(self))]
    async fn list_submissions_by_status(
        &self,
        status: AssignmentSubmissionStatus,
    ) -> RepoResult<Vec<AssignmentSubmission>> {
        let results = sqlx::query_as::<_, AssignmentSubmissionModel>(&format!(
            r#"
            SELECT {SUBMISSION_COLUMNS} FROM assignment_submissions
            WHERE status = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AssignmentSubmission::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_active_for_user(&self, user_id: Uuid) -> RepoResult<Vec<AssignmentSubmission>> {
        let results = sqlx::query_as::<_, AssignmentSubmissionModel>(&format!(
            r#"
            SELECT {SUBMISSION_COLUMNS} FROM assignment_submissions
            WHERE user_id = $1 AND status IN ('OPEN', 'SUBMITTED')
            ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AssignmentSubmission::from).collect())
    }

    #[instrument(skip(self, explanation, evidence_url))]
    async fn submit(
        &self,
        assignment_id: Uuid,
        user_id: Uuid,
        explanation: String,
        evidence_url: String,
    ) -> RepoResult<AssignmentSubmission> {
        let updated = sqlx::query_as::<_, AssignmentSubmissionModel>(&format!(
            r#"
            UPDATE assignment_submissions
            SET status = 'SUBMITTED', explanation = $3, evidence_url = $4, submitted_at = NOW()
            WHERE assignment_id = $1 AND user_id = $2
            RETURNING {SUBMISSION_COLUMNS}
            "#
        ))
        .bind(assignment_id)
        .bind(user_id)
        .bind(explanation)
        .bind(evidence_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        updated
            .map(AssignmentSubmission::from)
            .ok_or(DomainError::AssignmentNotFound(assignment_id))
    }

    #[instrument(skip(self))]
    async fn approve_submission(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
    ) -> RepoResult<AssignmentSubmission> {
        self.review_submission(id, reviewer_id, AssignmentSubmissionStatus::Approved)
            .await
    }

    #[instrument(skip(self))]
    async fn reject_submission(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
    ) -> RepoResult<AssignmentSubmission> {
        self.review_submission(id, reviewer_id, AssignmentSubmissionStatus::Rejected)
            .await
    }

    #[instrument(skip(self))]
    async fn delete_submission(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM assignment_submissions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AssignmentNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM assignment_submissions WHERE assignment_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AssignmentNotFound(id));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAssignmentRepository>();
    }
}
