//! PostgreSQL implementation of UploadRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use clan_core::entities::Upload;
use clan_core::traits::{RepoResult, UploadRepository};

use crate::models::UploadModel;

use super::error::map_db_error;

const UPLOAD_COLUMNS: &str =
    "id, kind, storage_path, mime_type, size_bytes, goal_submission_id, user_id, created_at";

/// PostgreSQL implementation of UploadRepository
#[derive(Clone)]
pub struct PgUploadRepository {
    pool: PgPool,
}

impl PgUploadRepository {
    /// Create a new PgUploadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UploadRepository for PgUploadRepository {
    #[instrument(skip(self, uploads))]
    async fn create_many(&self, uploads: &[Upload]) -> RepoResult<()> {
        for upload in uploads {
            sqlx::query(
                r#"
                INSERT INTO uploads
                    (id, kind, storage_path, mime_type, size_bytes, goal_submission_id,
                     user_id, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(upload.id)
            .bind(upload.kind.as_str())
            .bind(&upload.storage_path)
            .bind(&upload.mime_type)
            .bind(upload.size_bytes)
            .bind(upload.goal_submission_id)
            .bind(upload.user_id)
            .bind(upload.created_at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_submission(&self, submission_id: Uuid) -> RepoResult<Vec<Upload>> {
        let results = sqlx::query_as::<_, UploadModel>(&format!(
            r#"
            SELECT {UPLOAD_COLUMNS} FROM uploads
            WHERE goal_submission_id = $1
            ORDER BY created_at
            "#
        ))
        .bind(submission_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Upload::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_for_submission(&self, submission_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM uploads WHERE goal_submission_id = $1",
        )
        .bind(submission_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
