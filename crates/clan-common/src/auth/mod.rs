//! Authentication utilities - passwords, access tokens, challenge tokens

mod challenge;
mod jwt;
mod password;

pub use challenge::{Challenge, ChallengeError, ChallengeService};
pub use jwt::{Claims, JwtService};
pub use password::{
    generate_temp_password, hash_password, validate_password_strength, verify_password,
    PasswordService,
};
