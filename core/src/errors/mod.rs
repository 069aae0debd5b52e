//! Error types of the verification flows.

use thiserror::Error;

use ao_shared::validation::FieldError;

use crate::domain::value_objects::notice::Notice;

/// Failure reported by a collaborator (the platform API)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response (connection, timeout, decoding)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
        /// `ExpiresIn` from the error body, when it carried one
        expires_in: Option<u32>,
    },
}

impl GatewayError {
    /// Positive expiry carried by an HTTP error body
    pub fn expires_in(&self) -> Option<u32> {
        match self {
            GatewayError::Status { expires_in, .. } => expires_in.filter(|secs| *secs > 0),
            GatewayError::Transport(_) => None,
        }
    }
}

/// Failure of a controller operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Local precondition failed; nothing was sent
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The code cannot be requested until the countdown ends
    #[error("A new code can be requested in {seconds_remaining} seconds")]
    CountdownActive { seconds_remaining: u32 },

    /// Another request or submit is already in flight
    #[error("An operation is already in progress")]
    Busy,

    /// The backend rejected the request
    #[error("Rejected: {0}")]
    Application(Notice),

    /// The backend could not be reached
    #[error("Unavailable: {0}")]
    Transport(Notice),

    /// The session was torn down while the call was in flight
    #[error("Session was torn down")]
    Discarded,
}

impl FlowError {
    /// Message the host should display, if any
    pub fn notice(&self) -> Option<Notice> {
        match self {
            FlowError::Validation(errors) => errors.first().map(|e| Notice::Message(e.message)),
            FlowError::Application(notice) | FlowError::Transport(notice) => Some(notice.clone()),
            FlowError::CountdownActive { .. } | FlowError::Busy | FlowError::Discarded => None,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(
            self,
            FlowError::Validation(_) | FlowError::CountdownActive { .. } | FlowError::Busy
        )
    }
}

pub type FlowResult<T> = Result<T, FlowError>;
