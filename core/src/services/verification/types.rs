//! Request and outcome types of the verification controller

use crate::domain::entities::Channel;
use crate::domain::value_objects::Notice;

/// Payload of a request-code call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRequest {
    /// Trimmed phone number; `None` for flows that use the account phone
    pub destination: Option<String>,
    pub channel: Option<Channel>,
}

/// Payload of a submit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    /// Trimmed code as entered
    pub code: String,
    pub destination: Option<String>,
    pub channel: Option<Channel>,
}

/// Result of a successful (or soft-successful) request-code call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    /// Countdown that was started
    pub seconds_remaining: u32,
    /// The backend reported the code as already sent
    pub already_sent: bool,
    pub notice: Notice,
    /// Masked account phone, when the backend reported one
    pub masked_destination: Option<String>,
}

/// Result of a successful submit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
}
