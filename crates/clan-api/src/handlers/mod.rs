//! HTTP handlers, one module per resource

pub mod applications;
pub mod assignments;
pub mod auth;
pub mod goals;
pub mod health;
pub mod logs;
pub mod notifications;
pub mod ranking;
pub mod submissions;
pub mod users;
