//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `api` - Platform REST API location and per-flow endpoints
//! - `environment` - Environment detection and logging configuration
//! - `verification` - Per-flow OTP/TAC defaults (fallback expiry, code length)

pub mod api;
pub mod environment;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use api::{ApiConfig, ApiEndpoints, EndpointConfig, HttpMethod};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use verification::{FlowDefaults, VerificationConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Platform API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Verification flow defaults
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            api: ApiConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig::new("http://localhost:5000"),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig::from_env(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Build configuration from environment variables only
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        match env {
            Environment::Development => {
                let mut config = Self::development();
                config.api = ApiConfig::from_env();
                config
            }
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.api = ApiConfig::from_env();
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }
}
