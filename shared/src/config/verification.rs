//! Verification flow defaults

use serde::{Deserialize, Serialize};

/// Fallback expiry used when a request-code response carries no usable value
pub const DEFAULT_FALLBACK_EXPIRY_SECS: u32 = 300;

/// Change-password uses a shorter fallback than every other flow
pub const CHANGE_PASSWORD_FALLBACK_EXPIRY_SECS: u32 = 60;

/// Minimum phone number length accepted before a code is requested
pub const MIN_DESTINATION_LENGTH: usize = 10;

/// Defaults for a single hosting flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlowDefaults {
    /// Countdown applied when the response omits `ExpiresIn` or sends zero
    pub fallback_expiry_secs: u32,

    /// Minimum number of characters in the entered code
    pub min_code_length: usize,
}

impl FlowDefaults {
    pub const fn new(fallback_expiry_secs: u32, min_code_length: usize) -> Self {
        Self {
            fallback_expiry_secs,
            min_code_length,
        }
    }
}

/// Per-flow verification defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    #[serde(default = "default_forgot_password")]
    pub forgot_password: FlowDefaults,

    #[serde(default = "default_change_password")]
    pub change_password: FlowDefaults,

    #[serde(default = "default_reset_pin")]
    pub reset_pin: FlowDefaults,

    #[serde(default = "default_kyc")]
    pub kyc: FlowDefaults,

    #[serde(default = "default_add_bank_account")]
    pub add_bank_account: FlowDefaults,

    /// Minimum length of a user-supplied phone number
    #[serde(default = "default_min_destination_length")]
    pub min_destination_length: usize,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            forgot_password: default_forgot_password(),
            change_password: default_change_password(),
            reset_pin: default_reset_pin(),
            kyc: default_kyc(),
            add_bank_account: default_add_bank_account(),
            min_destination_length: default_min_destination_length(),
        }
    }
}

fn default_forgot_password() -> FlowDefaults {
    FlowDefaults::new(DEFAULT_FALLBACK_EXPIRY_SECS, 4)
}

fn default_change_password() -> FlowDefaults {
    FlowDefaults::new(CHANGE_PASSWORD_FALLBACK_EXPIRY_SECS, 4)
}

fn default_reset_pin() -> FlowDefaults {
    FlowDefaults::new(DEFAULT_FALLBACK_EXPIRY_SECS, 6)
}

fn default_kyc() -> FlowDefaults {
    FlowDefaults::new(DEFAULT_FALLBACK_EXPIRY_SECS, 4)
}

fn default_add_bank_account() -> FlowDefaults {
    FlowDefaults::new(DEFAULT_FALLBACK_EXPIRY_SECS, 6)
}

fn default_min_destination_length() -> usize {
    MIN_DESTINATION_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_expiry_per_flow() {
        let config = VerificationConfig::default();
        assert_eq!(config.forgot_password.fallback_expiry_secs, 300);
        assert_eq!(config.change_password.fallback_expiry_secs, 60);
        assert_eq!(config.reset_pin.fallback_expiry_secs, 300);
        assert_eq!(config.kyc.fallback_expiry_secs, 300);
        assert_eq!(config.add_bank_account.fallback_expiry_secs, 300);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config: VerificationConfig =
            toml::from_str("[kyc]\nfallback_expiry_secs = 120\nmin_code_length = 6\n").unwrap();
        assert_eq!(config.kyc, FlowDefaults::new(120, 6));
        assert_eq!(config.change_password.fallback_expiry_secs, 60);
        assert_eq!(config.min_destination_length, 10);
    }
}
