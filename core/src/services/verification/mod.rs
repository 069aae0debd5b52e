//! Verification module for OTP/TAC-gated account actions
//!
//! This module provides the code exchange shared by every hosting flow:
//! - Channel selection from backend-provided options
//! - Code requests with a resend countdown
//! - Submission of the code together with the flow's own fields
//! - Teardown that cancels the countdown and drops late responses

mod config;
mod controller;
mod countdown;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::{DestinationSource, FlowPolicy};
pub use controller::VerificationController;
pub use countdown::{format_countdown, Countdown, TICK_PERIOD};
pub use traits::{ChannelOptionSource, FlowFields, VerificationGateway};
pub use types::{CodeRequest, RequestOutcome, SubmitOutcome, SubmitRequest};
