//! User entity <-> model mapper

use clan_core::entities::{Role, User, UserStatus};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            nickname: model.nickname,
            discord_tag: model.discord_tag,
            email: model.email,
            role: Role::parse(&model.role).unwrap_or_default(),
            status: UserStatus::parse(&model.status).unwrap_or_default(),
            must_change_password: model.must_change_password,
            joined_at: model.joined_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
