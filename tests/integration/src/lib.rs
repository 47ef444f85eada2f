//! Test support: in-memory fakes and fixtures for service-level tests

pub mod fakes;

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use clan_common::auth::{ChallengeService, JwtService};
use clan_core::entities::{Goal, GoalScope, GoalStatus, GoalVisibility, Role, User};
use clan_service::{DiscordNotifier, ServiceContext};

use fakes::{
    FakeApplicationRepository, FakeAssignmentRepository, FakeAuditLogRepository,
    FakeGoalRepository, FakeGoalSubmissionRepository, FakeNotificationRepository,
    FakeUploadRepository, FakeUserRepository, FakeUserStatsRepository, InMemoryStore,
};

/// A service context wired to one shared in-memory store
pub fn test_context() -> (ServiceContext, Arc<InMemoryStore>) {
    let store = InMemoryStore::new();

    let ctx = ServiceContext::new(
        Arc::new(FakeUserRepository::new(store.clone())),
        Arc::new(FakeGoalRepository::new(store.clone())),
        Arc::new(FakeGoalSubmissionRepository::new(store.clone())),
        Arc::new(FakeAssignmentRepository::new(store.clone())),
        Arc::new(FakeApplicationRepository::new(store.clone())),
        Arc::new(FakeUserStatsRepository::new(store.clone())),
        Arc::new(FakeUploadRepository::new(store.clone())),
        Arc::new(FakeNotificationRepository::new(store.clone())),
        Arc::new(FakeAuditLogRepository::new(store.clone())),
        Arc::new(JwtService::new("integration-test-secret", 3600)),
        Arc::new(ChallengeService::new("integration-test-secret", 300)),
        Arc::new(DiscordNotifier::disabled()),
    );

    (ctx, store)
}

/// Seed a user directly into the store
pub fn seed_user(store: &InMemoryStore, nickname: &str, role: Role) -> User {
    let mut user = User::new_member(
        Uuid::new_v4(),
        nickname.to_string(),
        format!("{nickname}#0001"),
    );
    user.role = role;
    user.must_change_password = false;

    store
        .users
        .lock()
        .insert(user.id, (user.clone(), "not-a-real-hash".to_string()));
    user
}

/// Seed a goal directly into the store
pub fn seed_goal(store: &InMemoryStore, title: &str, scope: GoalScope, created_by: Uuid) -> Goal {
    let now = Utc::now();
    let goal = Goal {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        scope,
        target_amount: None,
        unit: Some("units".to_string()),
        status: GoalStatus::Active,
        visibility: GoalVisibility::Clan,
        starts_at: None,
        ends_at: None,
        created_by,
        created_at: now,
        updated_at: now,
    };

    store.goals.lock().insert(goal.id, goal.clone());
    goal
}
