//! JWT utilities for authentication
//!
//! Provides access-token encoding, decoding, and validation using the
//! `jsonwebtoken` crate. The portal issues a single stateless access token;
//! clients re-login when it expires.

use chrono::{Duration, Utc};
use clan_core::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Role string, e.g. `MEMBER`
    pub role: String,
    /// Forced password change pending
    pub must_change_password: bool,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid UUID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    /// Get the role
    ///
    /// # Errors
    /// Returns an error if the role claim is unknown
    pub fn user_role(&self) -> Result<Role, AppError> {
        Role::parse(&self.role).ok_or(AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for encoding and decoding access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Issue an access token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(
        &self,
        user_id: Uuid,
        role: Role,
        must_change_password: bool,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            must_change_password,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Expiry seconds tokens are issued with
    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 3600)
    }

    #[test]
    fn test_issue_and_validate() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id, Role::Elite, false).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.user_role().unwrap(), Role::Elite);
        assert!(!claims.must_change_password);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_must_change_password_flag_survives() {
        let service = create_test_service();
        let token = service.issue(Uuid::new_v4(), Role::Member, true).unwrap();
        let claims = service.validate(&token).unwrap();
        assert!(claims.must_change_password);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.validate("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new("a-completely-different-secret-key", 3600);

        let token = service.issue(Uuid::new_v4(), Role::Member, false).unwrap();
        assert!(other.validate(&token).is_err());
    }

    #[test]
    fn test_claims_bad_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            role: "MEMBER".to_string(),
            must_change_password: false,
            iat: 0,
            exp: i64::MAX,
        };
        assert!(claims.user_id().is_err());
    }
}
