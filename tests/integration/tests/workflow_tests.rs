//! Service-level workflow tests against the in-memory fakes
//!
//! These exercise the full review state machines end to end: evidence
//! preconditions, daily uniqueness, stats awards and reversals, recruitment
//! acceptance, and assignment transitions.

use integration_tests::{seed_goal, seed_user, test_context};

use clan_core::entities::{ApplicationStatus, GoalScope, Role, SubmissionStatus, UserStatus};
use clan_core::value_objects::UtcDay;
use clan_service::{
    AdminCreateSubmissionRequest, AssignmentService, CreateAssignmentRequest,
    CreateSubmissionRequest, EvidenceFileRequest, GoalService, NotificationService,
    RankingService, RecruitmentService, RejectRequest, SubmitApplicationRequest,
    SubmitAssignmentRequest, SubmissionService,
};

fn submission_request(goal_id: uuid::Uuid, evidence_url: Option<&str>) -> CreateSubmissionRequest {
    CreateSubmissionRequest {
        goal_id,
        amount: Some(500),
        note: Some("farmed all night".to_string()),
        evidence_url: evidence_url.map(String::from),
        files: vec![],
    }
}

fn application_request(token: String, input: String) -> SubmitApplicationRequest {
    SubmitApplicationRequest {
        nickname: "Newcomer".to_string(),
        discord_tag: "Newcomer#1234".to_string(),
        age: 19,
        region: "EU".to_string(),
        game_experience: "Three seasons of competitive play".to_string(),
        highest_rank: "Diamond".to_string(),
        preferences: "Farming and events".to_string(),
        weekly_hours: 12,
        prior_clan: false,
        why_left_prior_clan: None,
        why_join_us: "I want to grind with a serious group".to_string(),
        accepts_rules: true,
        portfolio_links: None,
        challenge_token: token,
        challenge_input: input,
    }
}

// ============================================================================
// Goal submission review
// ============================================================================

#[tokio::test]
async fn approve_requires_evidence() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Elite);
    let member = seed_user(&store, "Member", Role::Member);
    let goal = seed_goal(&store, "Farm iron", GoalScope::Clan, reviewer.id);

    let service = SubmissionService::new(&ctx);
    let created = service
        .create(member.id, submission_request(goal.id, None))
        .await
        .unwrap();

    let err = service.approve(created.id, reviewer.id).await.unwrap_err();
    assert_eq!(err.error_code(), "EVIDENCE_REQUIRED");

    // Still pending, nothing counted
    let stored = store.submissions.lock().get(&created.id).cloned().unwrap();
    assert_eq!(stored.status, SubmissionStatus::Pending);
    assert!(store.stats.lock().is_empty());
}

#[tokio::test]
async fn uploaded_file_counts_as_evidence() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Elite);
    let member = seed_user(&store, "Member", Role::Member);
    let goal = seed_goal(&store, "Farm iron", GoalScope::Clan, reviewer.id);

    let service = SubmissionService::new(&ctx);
    let mut request = submission_request(goal.id, None);
    request.files = vec![EvidenceFileRequest {
        storage_path: "/uploads/evi_1.png".to_string(),
        mime_type: "image/png".to_string(),
        size_bytes: 12_345,
    }];
    let created = service.create(member.id, request).await.unwrap();

    service.approve(created.id, reviewer.id).await.unwrap();
}

#[tokio::test]
async fn second_approval_fails_and_awards_once() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Elite);
    let member = seed_user(&store, "Member", Role::Member);
    let goal = seed_goal(&store, "Farm iron", GoalScope::Clan, reviewer.id);

    let service = SubmissionService::new(&ctx);
    let created = service
        .create(member.id, submission_request(goal.id, Some("https://x/1")))
        .await
        .unwrap();

    service.approve(created.id, reviewer.id).await.unwrap();

    let err = service.approve(created.id, reviewer.id).await.unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_REVIEWED");

    let today = UtcDay::today().date();
    let stats = store.stats.lock().get(&(member.id, today)).cloned().unwrap();
    assert_eq!(stats.goals_completed, 1);
    assert_eq!(stats.rank_points, 10);
    assert_eq!(stats.clan_contrib_approved_count, 1);
    assert_eq!(stats.daily_goals_points, 0);
}

#[tokio::test]
async fn daily_goal_blocks_second_approval_same_day() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Leader);
    let member = seed_user(&store, "Member", Role::Member);
    let goal = seed_goal(&store, "Daily ores", GoalScope::User, reviewer.id);

    let service = SubmissionService::new(&ctx);
    let first = service
        .create(member.id, submission_request(goal.id, Some("https://x/1")))
        .await
        .unwrap();
    let second = service
        .create(member.id, submission_request(goal.id, Some("https://x/2")))
        .await
        .unwrap();

    service.approve(first.id, reviewer.id).await.unwrap();

    let err = service.approve(second.id, reviewer.id).await.unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_COMPLETED_TODAY");

    // The failed approval left no trace: still pending, counted exactly once
    let stored = store.submissions.lock().get(&second.id).cloned().unwrap();
    assert_eq!(stored.status, SubmissionStatus::Pending);

    let today = UtcDay::today().date();
    let stats = store.stats.lock().get(&(member.id, today)).cloned().unwrap();
    assert_eq!(stats.daily_goals_points, 1);
    assert_eq!(stats.goals_completed, 1);
}

#[tokio::test]
async fn rejected_submission_cannot_be_approved() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Elite);
    let member = seed_user(&store, "Member", Role::Member);
    let goal = seed_goal(&store, "Farm iron", GoalScope::Clan, reviewer.id);

    let service = SubmissionService::new(&ctx);
    let created = service
        .create(member.id, submission_request(goal.id, Some("https://x/1")))
        .await
        .unwrap();

    service
        .reject(
            created.id,
            reviewer.id,
            RejectRequest {
                reason: Some("Screenshot is unreadable".to_string()),
            },
        )
        .await
        .unwrap();

    let stored = store.submissions.lock().get(&created.id).cloned().unwrap();
    assert_eq!(stored.status, SubmissionStatus::Rejected);
    assert_eq!(stored.rejection_reason.as_deref(), Some("Screenshot is unreadable"));

    let err = service.approve(created.id, reviewer.id).await.unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_REVIEWED");
    assert!(store.stats.lock().is_empty());
}

// ============================================================================
// Deletion and stats reversal
// ============================================================================

#[tokio::test]
async fn clan_goal_round_trip_is_net_zero() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Elite);
    let member = seed_user(&store, "Member", Role::Member);
    let goal = seed_goal(&store, "Vault iron", GoalScope::Clan, reviewer.id);

    let goals = GoalService::new(&ctx);
    let before = goals.progress(goal.id).await.unwrap().approved_total;
    assert_eq!(before, 0);

    let service = SubmissionService::new(&ctx);
    let created = service
        .create(member.id, submission_request(goal.id, Some("https://x/1")))
        .await
        .unwrap();
    service.approve(created.id, reviewer.id).await.unwrap();

    assert_eq!(goals.progress(goal.id).await.unwrap().approved_total, 500);

    service.delete(created.id).await.unwrap();

    // Aggregate back to where it started, counters fully reversed
    assert_eq!(goals.progress(goal.id).await.unwrap().approved_total, before);
    let today = UtcDay::today().date();
    let stats = store.stats.lock().get(&(member.id, today)).cloned().unwrap();
    assert_eq!(stats.goals_completed, 0);
    assert_eq!(stats.rank_points, 0);
    assert_eq!(stats.clan_contrib_approved_count, 0);
}

#[tokio::test]
async fn reversal_floors_at_zero() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Elite);
    let member = seed_user(&store, "Member", Role::Member);
    let goal = seed_goal(&store, "Vault iron", GoalScope::Clan, reviewer.id);

    let service = SubmissionService::new(&ctx);
    let created = service
        .create(member.id, submission_request(goal.id, Some("https://x/1")))
        .await
        .unwrap();
    service.approve(created.id, reviewer.id).await.unwrap();

    // Clobber the ledger row so the reversal would underflow
    let today = UtcDay::today().date();
    {
        let mut stats = store.stats.lock();
        let row = stats.get_mut(&(member.id, today)).unwrap();
        row.goals_completed = 0;
        row.rank_points = 3;
        row.clan_contrib_approved_count = 0;
    }

    service.delete(created.id).await.unwrap();

    let stats = store.stats.lock().get(&(member.id, today)).cloned().unwrap();
    assert_eq!(stats.goals_completed, 0);
    assert_eq!(stats.rank_points, 0);
    assert_eq!(stats.clan_contrib_approved_count, 0);
}

#[tokio::test]
async fn delete_only_reverses_the_deleted_award() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Elite);
    let member = seed_user(&store, "Member", Role::Member);
    let goal = seed_goal(&store, "Vault iron", GoalScope::Clan, reviewer.id);

    let service = SubmissionService::new(&ctx);
    let first = service
        .create(member.id, submission_request(goal.id, Some("https://x/1")))
        .await
        .unwrap();
    let second = service
        .create(member.id, submission_request(goal.id, Some("https://x/2")))
        .await
        .unwrap();

    service.approve(first.id, reviewer.id).await.unwrap();
    service.approve(second.id, reviewer.id).await.unwrap();

    service.delete(first.id).await.unwrap();

    let today = UtcDay::today().date();
    let stats = store.stats.lock().get(&(member.id, today)).cloned().unwrap();
    assert_eq!(stats.goals_completed, 1);
    assert_eq!(stats.rank_points, 10);
    assert_eq!(stats.clan_contrib_approved_count, 1);

    // Second delete of the same submission is a clean not-found
    let err = service.delete(first.id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn admin_create_approved_bypasses_daily_guard() {
    let (ctx, store) = test_context();
    let admin = seed_user(&store, "Admin", Role::Admin);
    let member = seed_user(&store, "Member", Role::Member);
    let goal = seed_goal(&store, "Daily ores", GoalScope::User, admin.id);

    let service = SubmissionService::new(&ctx);
    let first = service
        .create(member.id, submission_request(goal.id, Some("https://x/1")))
        .await
        .unwrap();
    service.approve(first.id, admin.id).await.unwrap();

    // Privileged insert lands approved despite today's completion
    service
        .admin_create(
            admin.id,
            AdminCreateSubmissionRequest {
                user_id: member.id,
                goal_id: goal.id,
                amount: None,
                note: None,
                evidence_url: Some("https://x/backfill".to_string()),
                status: SubmissionStatus::Approved,
                files: vec![],
            },
        )
        .await
        .unwrap();

    let today = UtcDay::today().date();
    let stats = store.stats.lock().get(&(member.id, today)).cloned().unwrap();
    assert_eq!(stats.daily_goals_points, 2);
    assert_eq!(stats.goals_completed, 2);
}

// ============================================================================
// Recruitment
// ============================================================================

#[tokio::test]
async fn challenge_is_case_insensitive() {
    let (ctx, _store) = test_context();
    let service = RecruitmentService::new(&ctx);

    let challenge = service.challenge().unwrap();
    let request = application_request(challenge.token, challenge.code.to_ascii_lowercase());

    service.submit(request).await.unwrap();
}

#[tokio::test]
async fn wrong_challenge_input_fails() {
    let (ctx, store) = test_context();
    let service = RecruitmentService::new(&ctx);

    let challenge = service.challenge().unwrap();
    let request = application_request(challenge.token, "WRONG".to_string());

    let err = service.submit(request).await.unwrap_err();
    assert_eq!(err.error_code(), "CHALLENGE_FAILED");
    assert!(store.applications.lock().is_empty());
}

#[tokio::test]
async fn free_text_fields_are_sanitized() {
    let (ctx, store) = test_context();
    let service = RecruitmentService::new(&ctx);

    let challenge = service.challenge().unwrap();
    let mut request = application_request(challenge.token, challenge.code);
    request.why_join_us = "I <b>really</b> want in; honest -- promise".to_string();

    let received = service.submit(request).await.unwrap();

    let stored = store.applications.lock().get(&received.id).cloned().unwrap();
    assert!(!stored.why_join_us.contains('<'));
    assert!(!stored.why_join_us.contains(';'));
    assert!(!stored.why_join_us.contains("--"));
}

#[tokio::test]
async fn accept_creates_exactly_one_linked_user() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Leader);
    let service = RecruitmentService::new(&ctx);

    let challenge = service.challenge().unwrap();
    let received = service
        .submit(application_request(challenge.token, challenge.code))
        .await
        .unwrap();

    let users_before = store.users.lock().len();
    let accepted = service.accept(received.id, reviewer.id).await.unwrap();
    assert_eq!(store.users.lock().len(), users_before + 1);
    assert!(!accepted.temporary_password.is_empty());

    // Linked both ways, provisioned as an active member with forced change
    let application = store.applications.lock().get(&received.id).cloned().unwrap();
    assert_eq!(application.status, ApplicationStatus::Accepted);
    assert_eq!(application.accepted_user_id, Some(accepted.user.id));
    assert_eq!(application.reviewed_by, Some(reviewer.id));

    let (user, _) = store.users.lock().get(&accepted.user.id).cloned().unwrap();
    assert_eq!(user.role, Role::Member);
    assert_eq!(user.status, UserStatus::Active);
    assert!(user.must_change_password);

    // Re-review is terminal, and no further account appears
    let err = service.accept(received.id, reviewer.id).await.unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_REVIEWED");
    let err = service
        .reject(received.id, reviewer.id, RejectRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_REVIEWED");
    assert_eq!(store.users.lock().len(), users_before + 1);
}

// ============================================================================
// Assignments
// ============================================================================

#[tokio::test]
async fn assignment_approval_requires_submitted_state() {
    let (ctx, store) = test_context();
    let staff = seed_user(&store, "Staff", Role::Elite);
    let member = seed_user(&store, "Member", Role::Member);

    let service = AssignmentService::new(&ctx);
    let assignment = service
        .create(
            staff.id,
            CreateAssignmentRequest {
                title: "Build the outpost wall".to_string(),
                description: "North side, stone brick, by Sunday".to_string(),
                assignees: vec![member.id],
            },
        )
        .await
        .unwrap();

    let row = store
        .assignment_submissions
        .lock()
        .values()
        .find(|s| s.assignment_id == assignment.id)
        .cloned()
        .unwrap();

    // Fan-out created the row OPEN; approving it directly is rejected
    let err = service.approve(row.id, staff.id).await.unwrap_err();
    assert_eq!(err.error_code(), "NOT_IN_SUBMITTED_STATE");

    service
        .submit(
            assignment.id,
            member.id,
            SubmitAssignmentRequest {
                explanation: "Wall finished, gate included".to_string(),
                evidence_url: "https://x/wall.png".to_string(),
            },
        )
        .await
        .unwrap();

    service.approve(row.id, staff.id).await.unwrap();

    // Terminal: a second review attempt fails
    let err = service.reject(row.id, staff.id, RejectRequest::default()).await.unwrap_err();
    assert_eq!(err.error_code(), "NOT_IN_SUBMITTED_STATE");
}

#[tokio::test]
async fn submit_without_fanned_out_row_is_not_found() {
    let (ctx, store) = test_context();
    let staff = seed_user(&store, "Staff", Role::Elite);
    let assignee = seed_user(&store, "Assignee", Role::Member);
    let outsider = seed_user(&store, "Outsider", Role::Member);

    let service = AssignmentService::new(&ctx);
    let assignment = service
        .create(
            staff.id,
            CreateAssignmentRequest {
                title: "Scout the ravine".to_string(),
                description: "Map the eastern ravine entrances".to_string(),
                assignees: vec![assignee.id],
            },
        )
        .await
        .unwrap();

    let err = service
        .submit(
            assignment.id,
            outsider.id,
            SubmitAssignmentRequest {
                explanation: "I did it anyway".to_string(),
                evidence_url: "https://x/map.png".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn deleting_assignment_cascades_submissions() {
    let (ctx, store) = test_context();
    let staff = seed_user(&store, "Staff", Role::Elite);
    let a = seed_user(&store, "MemberA", Role::Member);
    let b = seed_user(&store, "MemberB", Role::Member);

    let service = AssignmentService::new(&ctx);
    let assignment = service
        .create(
            staff.id,
            CreateAssignmentRequest {
                title: "Collect obsidian".to_string(),
                description: "Sixty-four blocks each".to_string(),
                assignees: vec![a.id, b.id],
            },
        )
        .await
        .unwrap();

    assert_eq!(store.assignment_submissions.lock().len(), 2);

    service.delete(assignment.id).await.unwrap();

    assert!(store.assignments.lock().is_empty());
    assert!(store.assignment_submissions.lock().is_empty());

    // Concurrent double-delete resolves to not-found, which callers tolerate
    let err = service.delete(assignment.id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Notifications and ranking
// ============================================================================

#[tokio::test]
async fn notifications_are_owner_scoped() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Elite);
    let member = seed_user(&store, "Member", Role::Member);
    let other = seed_user(&store, "Other", Role::Member);
    let goal = seed_goal(&store, "Farm iron", GoalScope::Clan, reviewer.id);

    let submissions = SubmissionService::new(&ctx);
    let created = submissions
        .create(member.id, submission_request(goal.id, Some("https://x/1")))
        .await
        .unwrap();
    submissions.approve(created.id, reviewer.id).await.unwrap();

    let notifications = NotificationService::new(&ctx);
    let mine = notifications.list_mine(member.id).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert!(mine[0].message.contains("500"));

    // Someone else cannot read-mark it
    let err = notifications.mark_read(mine[0].id, other.id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    notifications.mark_read(mine[0].id, member.id).await.unwrap();
    let mine = notifications.list_mine(member.id).await.unwrap();
    assert!(mine[0].read);
}

#[tokio::test]
async fn leaderboard_ranks_by_accumulated_points() {
    let (ctx, store) = test_context();
    let reviewer = seed_user(&store, "Reviewer", Role::Elite);
    let grinder = seed_user(&store, "Grinder", Role::Member);
    let casual = seed_user(&store, "Casual", Role::Member);
    let goal = seed_goal(&store, "Vault iron", GoalScope::Clan, reviewer.id);

    let submissions = SubmissionService::new(&ctx);
    for url in ["https://x/1", "https://x/2"] {
        let created = submissions
            .create(grinder.id, submission_request(goal.id, Some(url)))
            .await
            .unwrap();
        submissions.approve(created.id, reviewer.id).await.unwrap();
    }
    let created = submissions
        .create(casual.id, submission_request(goal.id, Some("https://x/3")))
        .await
        .unwrap();
    submissions.approve(created.id, reviewer.id).await.unwrap();

    let ranking = RankingService::new(&ctx);
    let boards = ranking.leaderboard().await.unwrap();

    assert_eq!(boards.top_by_rank_points[0].nickname, "Grinder");
    assert_eq!(boards.top_by_rank_points[0].value, 20);
    assert_eq!(boards.top_by_rank_points[1].nickname, "Casual");
    assert_eq!(boards.top_by_rank_points[1].value, 10);
}
