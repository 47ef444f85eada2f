//! Configuration loading

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ChallengeConfig, ConfigError, CorsConfig, DatabaseConfig,
    DiscordConfig, Environment, JwtConfig, ServerConfig, StorageConfig,
};
