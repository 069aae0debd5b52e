//! Shared utilities and common types for the AOne client services
//!
//! This crate provides common functionality used across all client modules:
//! - Configuration types (API endpoints, verification defaults, logging)
//! - Language selection and the translated message catalogue
//! - Backend response envelopes
//! - Utility functions (phone masking, field validation)

pub mod config;
pub mod i18n;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    ApiConfig, AppConfig, EndpointConfig, Environment, FlowDefaults, HttpMethod, LogFormat,
    LoggingConfig, VerificationConfig,
};
pub use i18n::MessageKey;
pub use types::{Language, MessageSelectionOption, MessageSelectionResponse, TacResponse};
pub use utils::{phone, validation};
