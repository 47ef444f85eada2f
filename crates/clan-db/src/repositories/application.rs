//! PostgreSQL implementation of ApplicationRepository
//!
//! Acceptance provisions the new account and stamps the application in one
//! transaction; the PENDING status check acts as a compare-and-swap so a
//! second concurrent accept finds zero rows and aborts without creating a
//! user.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use clan_core::entities::{ApplicationStatus, RecruitmentApplication, User};
use clan_core::error::DomainError;
use clan_core::traits::{ApplicationRepository, RepoResult};

use crate::models::RecruitmentApplicationModel;

use super::error::{map_db_error, map_unique_violation};

const APPLICATION_COLUMNS: &str = "id, nickname, discord_tag, age, region, game_experience, \
     highest_rank, preferences, weekly_hours, prior_clan, why_left_prior_clan, why_join_us, \
     portfolio_links, status, reviewed_by, reviewed_at, accepted_user_id, created_at";

/// PostgreSQL implementation of ApplicationRepository
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    /// Create a new PgApplicationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Classify a failed status CAS: missing row vs already reviewed
    async fn classify_review_conflict(&self, id: Uuid) -> DomainError {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM recruitment_applications WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await;

        match exists {
            Ok(true) => DomainError::AlreadyReviewed,
            Ok(false) => DomainError::ApplicationNotFound(id),
            Err(e) => map_db_error(e),
        }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    #[instrument(skip(self, application))]
    async fn create(&self, application: &RecruitmentApplication) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO recruitment_applications
                (id, nickname, discord_tag, age, region, game_experience, highest_rank,
                 preferences, weekly_hours, prior_clan, why_left_prior_clan, why_join_us,
                 portfolio_links, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(application.id)
        .bind(&application.nickname)
        .bind(&application.discord_tag)
        .bind(application.age)
        .bind(&application.region)
        .bind(&application.game_experience)
        .bind(&application.highest_rank)
        .bind(&application.preferences)
        .bind(application.weekly_hours)
        .bind(application.prior_clan)
        .bind(&application.why_left_prior_clan)
        .bind(&application.why_join_us)
        .bind(&application.portfolio_links)
        .bind(application.status.as_str())
        .bind(application.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<RecruitmentApplication>> {
        let result = sqlx::query_as::<_, RecruitmentApplicationModel>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM recruitment_applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RecruitmentApplication::from))
    }

    #[instrument(skip(self))]
    async fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> RepoResult<Vec<RecruitmentApplication>> {
        let results = sqlx::query_as::<_, RecruitmentApplicationModel>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS} FROM recruitment_applications
            WHERE status = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RecruitmentApplication::from).collect())
    }

    #[instrument(skip(self, user, password_hash))]
    async fn accept(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        user: &User,
        password_hash: &str,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE recruitment_applications
            SET status = 'ACCEPTED', reviewed_by = $2, reviewed_at = NOW(), accepted_user_id = $3
            WHERE id = $1 AND status = 'PENDING'
            "#,
        )
        .bind(id)
        .bind(reviewer_id)
        .bind(user.id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            drop(tx);
            return Err(self.classify_review_conflict(id).await);
        }

        sqlx::query(
            r#"
            INSERT INTO users
                (id, nickname, discord_tag, email, password_hash, role, status,
                 must_change_password, joined_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id)
        .bind(&user.nickname)
        .bind(&user.discord_tag)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.role.as_str())
        .bind(user.status.as_str())
        .bind(user.must_change_password)
        .bind(user.joined_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::NicknameTaken))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn reject(&self, id: Uuid, reviewer_id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE recruitment_applications
            SET status = 'REJECTED', reviewed_by = $2, reviewed_at = NOW()
            WHERE id = $1 AND status = 'PENDING'
            "#,
        )
        .bind(id)
        .bind(reviewer_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(self.classify_review_conflict(id).await);
        }

        Ok(())
    }
}
