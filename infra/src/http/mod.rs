//! HTTP access to the platform REST API
//!
//! The platform answers with PascalCase JSON envelopes. Non-2xx answers still
//! carry a body with `Message` and sometimes `ExpiresIn`; both are kept on the
//! resulting [`GatewayError::Status`](ao_core::errors::GatewayError).

mod client;

#[cfg(test)]
mod tests;

pub use client::{status_error, ApiClient, ErrorBody, LANGUAGE_HEADER, PLATFORM_PARAM};
