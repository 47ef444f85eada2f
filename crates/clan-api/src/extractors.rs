//! Request extractors
//!
//! `AuthUser` pulls and validates the Bearer token; `ValidatedJson` runs
//! `validator` rules on deserialized request bodies.

use axum::{
    async_trait,
    extract::{FromRef, FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use clan_core::Role;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from the JWT access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
    pub must_change_password: bool,
}

impl AuthUser {
    /// Require a staff role (LEADER, ELITE or ADMIN)
    pub fn require_staff(&self) -> Result<(), ApiError> {
        if self.role.is_staff() {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }

    /// Require the LEADER role
    pub fn require_leader(&self) -> Result<(), ApiError> {
        if self.role == Role::Leader {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuth
            })?;

        let user_id = claims.user_id().map_err(|_| ApiError::InvalidAuth)?;
        let role = claims.user_role().map_err(|_| ApiError::InvalidAuth)?;

        Ok(AuthUser {
            user_id,
            role,
            must_change_password: claims.must_change_password,
        })
    }
}

/// JSON body run through `validator` rules after deserialization
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        value
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        Ok(Self(value))
    }
}
