//! Application state shared across handlers

use clan_common::auth::JwtService;
use clan_service::ServiceContext;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    ctx: ServiceContext,
}

impl AppState {
    /// Create the state from a fully wired service context
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// The service dependency container
    pub fn service_context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// The JWT service, for the auth extractor
    pub fn jwt_service(&self) -> &JwtService {
        self.ctx.jwt_service()
    }
}
