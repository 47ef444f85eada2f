//! Route table

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    applications, assignments, auth, goals, health, logs, notifications, ranking, submissions,
    users,
};
use crate::state::AppState;

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/change-password", post(auth::change_password))
        // Public surface
        .route("/public/challenge", get(applications::challenge))
        .route("/public/goals", get(goals::list_public))
        .route("/ranking", get(ranking::leaderboard))
        // Recruitment
        .route("/applications", post(applications::submit).get(applications::list))
        .route("/applications/:id", get(applications::get))
        .route("/applications/:id/accept", post(applications::accept))
        .route("/applications/:id/reject", post(applications::reject))
        // Goal submissions
        .route("/submissions", post(submissions::create).get(submissions::list))
        .route("/submissions/mine", get(submissions::mine))
        .route("/submissions/admin-create", post(submissions::admin_create))
        .route("/submissions/:id/approve", post(submissions::approve))
        .route("/submissions/:id/reject", post(submissions::reject))
        .route("/submissions/:id", delete(submissions::delete))
        // Assignments
        .route("/assignments", post(assignments::create).get(assignments::list))
        .route("/assignments/submissions", get(assignments::submissions))
        .route("/assignments/my", get(assignments::my))
        .route("/assignments/:id/submit", post(assignments::submit))
        .route(
            "/assignments/submissions/:id/approve",
            post(assignments::approve),
        )
        .route(
            "/assignments/submissions/:id/reject",
            post(assignments::reject),
        )
        .route(
            "/assignments/submissions/:id",
            delete(assignments::delete_submission),
        )
        .route("/assignments/:id", delete(assignments::delete))
        // Goals
        .route("/goals", get(goals::list).post(goals::create))
        .route("/goals/:id", patch(goals::update).delete(goals::delete))
        .route("/goals/:id/progress", get(goals::progress))
        // Users
        .route("/users", get(users::list).post(users::create))
        .route("/users/me", patch(users::update_me))
        .route("/users/:id/role", patch(users::change_role))
        .route("/users/:id/status", patch(users::change_status))
        .route("/users/:id/reset-password", post(users::reset_password))
        .route("/users/:id", delete(users::deactivate))
        // Notifications
        .route("/notifications", get(notifications::list))
        .route("/notifications/:id/read", post(notifications::mark_read))
        // Audit log
        .route("/logs", get(logs::list));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api)
        .with_state(state)
}
