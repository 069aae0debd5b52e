//! Configuration loading
//!
//! Sources are layered, later ones winning:
//! 1. Built-in defaults for the detected environment
//! 2. `config.<environment>.toml` in the working directory, if present
//! 3. `AONE__*` environment variables (`AONE__API__BASE_URL`, ...)
//!
//! `.env.<environment>` and `.env` are read into the process environment first.

use ao_shared::{AppConfig, Environment};
use config::{Config, File, FileFormat};

use crate::InfrastructureError;

/// Prefix of environment variables overriding configuration keys
pub const ENV_PREFIX: &str = "AONE";

/// Load the application configuration for the current environment
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    // Environment may have been set by one of the .env files
    let environment = Environment::from_env();
    let config = build(environment, Some(&environment.config_file()), None)?;

    tracing::info!(
        environment = %config.environment,
        api_base_url = %config.api.base_url,
        event = "config_loaded",
        "Configuration loaded"
    );
    Ok(config)
}

/// Layer defaults, an optional TOML file and the environment for `environment`
///
/// `overrides` is an inline TOML document applied last, used by tests.
pub fn build(
    environment: Environment,
    file: Option<&str>,
    overrides: Option<&str>,
) -> Result<AppConfig, InfrastructureError> {
    let mut defaults = AppConfig::from_env();
    defaults.environment = environment;

    let mut builder = Config::builder().add_source(Config::try_from(&defaults)?);
    if let Some(file) = file {
        builder = builder.add_source(File::with_name(file).required(false));
    }
    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    );
    if let Some(overrides) = overrides {
        builder = builder.add_source(File::from_str(overrides, FileFormat::Toml));
    }

    let mut config: AppConfig = builder.build()?.try_deserialize()?;
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = build(Environment::Development, None, None).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.verification.forgot_password.fallback_expiry_secs, 300);
        assert_eq!(config.verification.change_password.fallback_expiry_secs, 60);
        assert_eq!(config.api.platform, "Web");
    }

    #[test]
    fn test_inline_overrides() {
        let overrides = r#"
            [api]
            base_url = "https://api.example.com/"
            request_timeout_secs = 10

            [verification.kyc]
            fallback_expiry_secs = 120
            min_code_length = 4
        "#;
        let config = build(Environment::Staging, None, Some(overrides)).unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.request_timeout_secs, 10);
        assert_eq!(config.verification.kyc.fallback_expiry_secs, 120);
        assert_eq!(config.verification.reset_pin.min_code_length, 6);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let config = build(Environment::Development, Some("does-not-exist.toml"), None);
        assert!(config.is_ok());
    }
}
