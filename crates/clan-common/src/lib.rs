//! # clan-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! input sanitization, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod sanitize;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    generate_temp_password, hash_password, validate_password_strength, verify_password,
    Challenge, ChallengeError, ChallengeService, Claims, JwtService, PasswordService,
};
pub use config::{
    AppConfig, AppSettings, ChallengeConfig, ConfigError, CorsConfig, DatabaseConfig,
    DiscordConfig, Environment, JwtConfig, ServerConfig, StorageConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use sanitize::{sanitize_required, sanitize_text};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
