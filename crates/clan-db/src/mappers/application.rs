//! Recruitment application entity <-> model mapper

use clan_core::entities::{ApplicationStatus, RecruitmentApplication};

use crate::models::RecruitmentApplicationModel;

impl From<RecruitmentApplicationModel> for RecruitmentApplication {
    fn from(model: RecruitmentApplicationModel) -> Self {
        RecruitmentApplication {
            id: model.id,
            nickname: model.nickname,
            discord_tag: model.discord_tag,
            age: model.age,
            region: model.region,
            game_experience: model.game_experience,
            highest_rank: model.highest_rank,
            preferences: model.preferences,
            weekly_hours: model.weekly_hours,
            prior_clan: model.prior_clan,
            why_left_prior_clan: model.why_left_prior_clan,
            why_join_us: model.why_join_us,
            portfolio_links: model.portfolio_links,
            status: ApplicationStatus::parse(&model.status).unwrap_or_default(),
            reviewed_by: model.reviewed_by,
            reviewed_at: model.reviewed_at,
            accepted_user_id: model.accepted_user_id,
            created_at: model.created_at,
        }
    }
}
