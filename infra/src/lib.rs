//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the AOne client services.
//! It provides concrete implementations of the collaborator traits declared in
//! `ao_core` and the process-level setup around them.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **HTTP**: reqwest client for the platform REST API (headers, auth, envelopes)
//! - **Gateways**: one REST gateway per verification flow
//! - **Channels**: delivery channel options from the message-selection endpoint
//! - **Scripted**: in-memory gateway for development and demos
//! - **Config / Telemetry**: layered configuration loading and tracing setup

pub mod channels;
pub mod config;
pub mod gateways;
pub mod http;
pub mod scripted;
pub mod telemetry;

pub use channels::MessageSelectionSource;
pub use config::load_config;
pub use gateways::{
    AddBankAccountGateway, ChangePasswordGateway, ForgotPasswordGateway, KycGateway,
    ResetPinGateway, RestGateway,
};
pub use http::ApiClient;
pub use scripted::ScriptedGateway;
pub use telemetry::init_tracing;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Global tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
