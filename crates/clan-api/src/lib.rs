//! # clan-api
//!
//! Thin axum HTTP boundary over the service layer: routing, the auth
//! extractor, error → status mapping, and server bootstrap. All business
//! rules live below in `clan-service`.

pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::run;
pub use state::AppState;
