//! Verification session entity: the state of one OTP/TAC exchange inside a form.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use ao_shared::validation::FieldError;

use super::channel::{Channel, ChannelOption};
use super::flow::FlowKind;
use crate::domain::value_objects::notice::{Notice, SessionError, CODE_FIELD, ROOT_FIELD};

/// Lifecycle of a verification session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// No code requested yet
    Idle,
    /// A request-code call is in flight
    Requesting,
    /// At least one code was dispatched
    CodeSent,
    /// A submit call is in flight
    Verifying,
    /// The dependent action succeeded
    Verified,
}

impl SessionStatus {
    /// Whether a network call is outstanding
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionStatus::Requesting | SessionStatus::Verifying)
    }
}

/// State of one verification exchange, owned by the hosting form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSession {
    pub id: Uuid,
    pub flow: FlowKind,
    pub channel: Option<Channel>,
    /// Options offered by the backend; empty when none could be loaded
    pub channel_options: Vec<ChannelOption>,
    /// Phone number the code is sent to, as entered by the user
    pub destination: String,
    /// Masked account phone reported by the backend
    pub masked_destination: Option<String>,
    pub status: SessionStatus,
    pub seconds_remaining: u32,
    pub entered_code: String,
    /// First error of the last failed action
    pub last_error: Option<SessionError>,
    /// Every field error of the last failed validation
    pub field_errors: Vec<SessionError>,
    /// Informational message (code sent, code already sent, action succeeded)
    pub notice: Option<Notice>,
    pub code_sent_at: Option<DateTime<Utc>>,
}

/// Copy of the session handed to observers
pub type SessionSnapshot = VerificationSession;

impl VerificationSession {
    pub fn new(flow: FlowKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            flow,
            channel: None,
            channel_options: Vec::new(),
            destination: String::new(),
            masked_destination: None,
            status: SessionStatus::Idle,
            seconds_remaining: 0,
            entered_code: String::new(),
            last_error: None,
            field_errors: Vec::new(),
            notice: None,
            code_sent_at: None,
        }
    }

    /// Whether the request button should be enabled, ignoring flow-owned fields
    pub fn can_request_code(&self, channel_required: bool) -> bool {
        (!channel_required || self.channel.is_some())
            && self.seconds_remaining == 0
            && !self.status.is_pending()
    }

    /// Whether a code has been dispatched and no call is in flight
    pub fn can_submit(&self) -> bool {
        self.status == SessionStatus::CodeSent
    }

    /// Decrement the countdown by one second; returns the remaining seconds
    pub fn tick(&mut self) -> u32 {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        self.seconds_remaining
    }

    pub fn clear_errors(&mut self) {
        self.last_error = None;
        self.field_errors.clear();
    }

    /// Drop errors attached to `field`
    pub fn clear_field_error(&mut self, field: &str) {
        self.field_errors.retain(|e| e.field != field);
        if self.last_error.as_ref().is_some_and(|e| e.field == field) {
            self.last_error = self.field_errors.first().cloned();
        }
    }

    pub fn set_error(&mut self, error: SessionError) {
        self.field_errors = vec![error.clone()];
        self.last_error = Some(error);
    }

    pub fn set_field_errors(&mut self, errors: &[FieldError]) {
        self.field_errors = errors.iter().map(SessionError::from).collect();
        self.last_error = self.field_errors.first().cloned();
    }

    /// Error currently shown for `field`
    pub fn error_for(&self, field: &str) -> Option<&SessionError> {
        self.field_errors.iter().find(|e| e.field == field)
    }

    pub fn root_error(&self) -> Option<&SessionError> {
        self.error_for(ROOT_FIELD)
    }

    pub fn code_error(&self) -> Option<&SessionError> {
        self.error_for(CODE_FIELD)
    }

    /// Return to `Idle`, keeping what the form loaded or the user typed outside the code exchange
    pub fn reset(&mut self) {
        self.channel = None;
        self.status = SessionStatus::Idle;
        self.seconds_remaining = 0;
        self.entered_code.clear();
        self.masked_destination = None;
        self.code_sent_at = None;
        self.clear_errors();
    }
}
