//! Envelopes returned by the platform REST API
//!
//! The backend uses PascalCase field names and signals success with
//! `Code == 0` for TAC operations and `Code == 200` for lookups.

use serde::{Deserialize, Serialize};

/// Status code the backend uses for a successful TAC operation
pub const TAC_SUCCESS_CODE: i32 = 0;

/// Status code the backend uses for a successful lookup
pub const LOOKUP_SUCCESS_CODE: i32 = 200;

/// Response to both the request-code and the submit calls of a TAC flow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TacResponse {
    pub code: i32,

    #[serde(default)]
    pub message: Option<String>,

    /// Seconds until the dispatched code expires
    #[serde(default)]
    pub expires_in: Option<i64>,

    /// Phone number the code went to, for flows using the account phone
    #[serde(default)]
    pub phone: Option<String>,
}

impl TacResponse {
    pub fn is_success(&self) -> bool {
        self.code == TAC_SUCCESS_CODE
    }

    /// Positive expiry value, if any
    pub fn usable_expiry(&self) -> Option<u32> {
        self.expires_in
            .filter(|secs| *secs > 0)
            .map(|secs| secs.min(u32::MAX as i64) as u32)
    }

    /// Server message, ignoring blank strings
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// A single delivery channel option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageSelectionOption {
    pub value: String,
    pub text: String,
}

/// Response of the message-selection lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageSelectionResponse {
    pub code: i32,

    #[serde(default)]
    pub data: Option<Vec<MessageSelectionOption>>,
}
