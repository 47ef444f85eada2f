//! Anti-automation challenge tokens for the public recruitment form
//!
//! The server mints a short-lived signed token embedding a random code and
//! shows the code to the applicant; the form echoes both back. Verification
//! checks the signature, the expiry, and a case-insensitive match between
//! the embedded code and the applicant's input.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet for challenge codes; ambiguous glyphs are left out
const CODE_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of generated challenge codes
const CODE_LEN: usize = 6;

/// A freshly minted challenge: the signed token and the code to display
#[derive(Debug, Clone, Serialize)]
pub struct Challenge {
    pub token: String,
    pub code: String,
}

/// Claims embedded in a challenge token
#[derive(Debug, Serialize, Deserialize)]
struct ChallengeClaims {
    /// The expected code
    code: String,
    /// Issued at (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    exp: i64,
}

/// Challenge verification failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChallengeError {
    #[error("challenge token is invalid")]
    InvalidToken,

    #[error("challenge token has expired")]
    Expired,

    #[error("challenge input does not match")]
    Mismatch,
}

/// Mints and verifies challenge tokens
#[derive(Clone)]
pub struct ChallengeService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl ChallengeService {
    /// Create a new challenge service with the given secret and TTL seconds
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Mint a new challenge
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self) -> Result<Challenge, ChallengeError> {
        let code = generate_code();
        let now = Utc::now();
        let claims = ChallengeClaims {
            code: code.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| ChallengeError::InvalidToken)?;

        Ok(Challenge { token, code })
    }

    /// Verify a token against the applicant's echoed input
    ///
    /// # Errors
    /// Returns the specific failure; callers typically collapse all three
    /// into a single challenge-failed error kind
    pub fn verify(&self, token: &str, input: &str) -> Result<(), ChallengeError> {
        let validation = Validation::default();

        let data = decode::<ChallengeClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => ChallengeError::Expired,
                _ => ChallengeError::InvalidToken,
            })?;

        if data.claims.code.trim().eq_ignore_ascii_case(input.trim()) {
            Ok(())
        } else {
            Err(ChallengeError::Mismatch)
        }
    }
}

impl std::fmt::Debug for ChallengeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChallengeService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_CHARS[rng.gen_range(0..CODE_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ChallengeService {
        ChallengeService::new("challenge-secret-for-tests", 300)
    }

    #[test]
    fn test_round_trip() {
        let svc = service();
        let challenge = svc.issue().unwrap();
        assert_eq!(challenge.code.len(), 6);
        assert!(svc.verify(&challenge.token, &challenge.code).is_ok());
    }

    #[test]
    fn test_case_insensitive_match() {
        let svc = service();
        let challenge = svc.issue().unwrap();
        let lowered = challenge.code.to_ascii_lowercase();
        assert!(svc.verify(&challenge.token, &lowered).is_ok());
    }

    #[test]
    fn test_whitespace_tolerated() {
        let svc = service();
        let challenge = svc.issue().unwrap();
        let padded = format!("  {}  ", challenge.code);
        assert!(svc.verify(&challenge.token, &padded).is_ok());
    }

    #[test]
    fn test_wrong_input_rejected() {
        let svc = service();
        let challenge = svc.issue().unwrap();
        assert_eq!(svc.verify(&challenge.token, "WRONG"), Err(ChallengeError::Mismatch));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = service();
        assert_eq!(svc.verify("garbage", "ANY"), Err(ChallengeError::InvalidToken));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let svc = service();
        let other = ChallengeService::new("some-other-secret", 300);
        let challenge = other.issue().unwrap();
        assert_eq!(
            svc.verify(&challenge.token, &challenge.code),
            Err(ChallengeError::InvalidToken)
        );
    }

    #[test]
    fn test_code_alphabet() {
        for _ in 0..20 {
            let code = generate_code();
            assert!(code.bytes().all(|b| CODE_CHARS.contains(&b)));
        }
    }
}
