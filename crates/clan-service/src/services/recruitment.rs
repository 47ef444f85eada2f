//! Recruitment service
//!
//! Public application intake behind a challenge token, and the staff
//! accept/reject workflow. Acceptance provisions the member account inside
//! the repository transaction; everything after the commit (audit,
//! notifications, Discord) is best-effort.

use tracing::{info, instrument};
use uuid::Uuid;

use clan_common::{sanitize_required, sanitize_text};
use clan_core::entities::{
    ApplicationStatus, NotificationKind, RecruitmentApplication, User,
};
use clan_core::error::DomainError;

use crate::dto::{
    AcceptedApplicationResponse, ApplicationReceivedResponse, ApplicationResponse,
    ApplicationSummaryResponse, ChallengeResponse, RejectRequest, SubmitApplicationRequest,
    UserSummary,
};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Recruitment service
pub struct RecruitmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecruitmentService<'a> {
    /// Create a new RecruitmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mint a challenge for the public form
    #[instrument(skip(self))]
    pub fn challenge(&self) -> ServiceResult<ChallengeResponse> {
        let challenge = self
            .ctx
            .challenge_service()
            .issue()
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(ChallengeResponse {
            token: challenge.token,
            code: challenge.code,
        })
    }

    /// Public submission; the challenge gate runs first, and every
    /// free-text field passes the allow-list sanitizer before persistence
    #[instrument(skip(self, request), fields(nickname = %request.nickname))]
    pub async fn submit(
        &self,
        request: SubmitApplicationRequest,
    ) -> ServiceResult<ApplicationReceivedResponse> {
        if self
            .ctx
            .challenge_service()
            .verify(&request.challenge_token, &request.challenge_input)
            .is_err()
        {
            return Err(DomainError::ChallengeFailed.into());
        }

        if !request.accepts_rules {
            return Err(ServiceError::validation("The clan rules must be accepted"));
        }

        let application = RecruitmentApplication {
            id: Uuid::new_v4(),
            nickname: sanitize_required(&request.nickname, 32),
            discord_tag: sanitize_required(&request.discord_tag, 64),
            age: request.age,
            region: sanitize_required(&request.region, 64),
            game_experience: sanitize_required(&request.game_experience, 2000),
            highest_rank: sanitize_required(&request.highest_rank, 64),
            preferences: sanitize_required(&request.preferences, 500),
            weekly_hours: request.weekly_hours,
            prior_clan: request.prior_clan,
            why_left_prior_clan: sanitize_text(request.why_left_prior_clan.as_deref(), 1000),
            why_join_us: sanitize_required(&request.why_join_us, 2000),
            portfolio_links: sanitize_text(request.portfolio_links.as_deref(), 1000),
            status: ApplicationStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            accepted_user_id: None,
            created_at: chrono::Utc::now(),
        };

        self.ctx.application_repo().create(&application).await?;

        info!(application_id = %application.id, "Recruitment application received");

        Ok(ApplicationReceivedResponse {
            id: application.id,
            created_at: application.created_at,
        })
    }

    /// Staff review queue for one status
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        status: ApplicationStatus,
    ) -> ServiceResult<Vec<ApplicationSummaryResponse>> {
        let applications = self.ctx.application_repo().list_by_status(status).await?;
        Ok(applications.iter().map(ApplicationSummaryResponse::from).collect())
    }

    /// Full application detail
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ApplicationResponse> {
        let application = self
            .ctx
            .application_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Application", id.to_string()))?;

        Ok(ApplicationResponse::from(&application))
    }

    /// Accept a PENDING application: one transaction provisions the MEMBER
    /// account (forced password change) and stamps the application with
    /// reviewer + created-user linkage. A second review attempt fails with
    /// AlreadyReviewed and creates no account.
    #[instrument(skip(self))]
    pub async fn accept(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
    ) -> ServiceResult<AcceptedApplicationResponse> {
        let application = self
            .ctx
            .application_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Application", id.to_string()))?;

        if !application.is_pending() {
            return Err(DomainError::AlreadyReviewed.into());
        }

        let temp_password = self.ctx.password_service().generate_temp();
        let password_hash = self
            .ctx
            .password_service()
            .hash(&temp_password)
            .map_err(ServiceError::from)?;

        let user = User::new_member(
            Uuid::new_v4(),
            application.nickname.clone(),
            application.discord_tag.clone(),
        );

        self.ctx
            .application_repo()
            .accept(id, reviewer_id, &user, &password_hash)
            .await?;

        info!(
            application_id = %id,
            user_id = %user.id,
            "Application accepted, member account provisioned"
        );

        AuditService::new(self.ctx)
            .log(
                reviewer_id,
                "FORM_ACCEPTED",
                "RECRUITMENT_APPLICATION",
                Some(id),
                Some(serde_json::json!({
                    "accepted_user_id": user.id,
                    "nickname": user.nickname,
                })),
            )
            .await;

        NotificationService::new(self.ctx)
            .notify(
                user.id,
                NotificationKind::FormStatus,
                "Welcome to the clan!",
                "Your application was accepted. Change your password on first login.",
            )
            .await;

        self.ctx
            .discord()
            .send_message(&format!("🎉 New member joined the clan: {}", user.nickname))
            .await;

        Ok(AcceptedApplicationResponse {
            user: UserSummary::from(&user),
            temporary_password: temp_password,
        })
    }

    /// Reject a PENDING application; the reason lands in the audit trail
    /// (the applicant has no account to notify)
    #[instrument(skip(self, request))]
    pub async fn reject(
        &self,
        id: Uuid,
        reviewer_id: Uuid,
        request: RejectRequest,
    ) -> ServiceResult<()> {
        let application = self
            .ctx
            .application_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Application", id.to_string()))?;

        if !application.is_pending() {
            return Err(DomainError::AlreadyReviewed.into());
        }

        self.ctx.application_repo().reject(id, reviewer_id).await?;

        info!(application_id = %id, reviewer_id = %reviewer_id, "Application rejected");

        let reason = sanitize_text(request.reason.as_deref(), 500).unwrap_or_default();
        AuditService::new(self.ctx)
            .log(
                reviewer_id,
                "FORM_REJECTED",
                "RECRUITMENT_APPLICATION",
                Some(id),
                Some(serde_json::json!({ "reason": reason })),
            )
            .await;

        self.ctx
            .discord()
            .send_message(&format!(
                "Recruitment application from {} was declined.",
                application.nickname
            ))
            .await;

        Ok(())
    }
}
