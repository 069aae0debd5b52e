//! # AOne Core
//!
//! Verification logic shared by the AOne client forms.
//! This crate contains the session entities, the verification controller with
//! its resend countdown, the hosting flows, observable stores, and the
//! collaborator traits implemented by the infrastructure layer.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
