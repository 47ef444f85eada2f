//! Upload entity <-> model mapper

use clan_core::entities::{Upload, UploadKind};

use crate::models::UploadModel;

impl From<UploadModel> for Upload {
    fn from(model: UploadModel) -> Self {
        Upload {
            id: model.id,
            kind: UploadKind::parse(&model.kind).unwrap_or_default(),
            storage_path: model.storage_path,
            mime_type: model.mime_type,
            size_bytes: model.size_bytes,
            goal_submission_id: model.goal_submission_id,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}
