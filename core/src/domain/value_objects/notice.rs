//! User-visible messages produced by a verification session.

use ao_shared::validation::FieldError;
use ao_shared::{Language, MessageKey};

/// Field name for messages that belong to the form rather than one input
pub const ROOT_FIELD: &str = "root";

/// Field name of the code input
pub const CODE_FIELD: &str = "otpCode";

/// Field name of the destination (phone number) input
pub const DESTINATION_FIELD: &str = "phoneNumber";

/// A message to show the user: a catalogue entry or a server message verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Message(MessageKey),
    Server(String),
}

impl Notice {
    /// Server message when present and non-blank, otherwise `fallback`
    pub fn server_or(message: Option<&str>, fallback: MessageKey) -> Self {
        match message.map(str::trim).filter(|m| !m.is_empty()) {
            Some(message) => Notice::Server(message.to_string()),
            None => Notice::Message(fallback),
        }
    }

    pub fn render(&self, lang: Language) -> String {
        match self {
            Notice::Message(key) => key.translate(lang),
            Notice::Server(message) => message.clone(),
        }
    }
}

impl From<MessageKey> for Notice {
    fn from(key: MessageKey) -> Self {
        Notice::Message(key)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Message(key) => write!(f, "{}", key),
            Notice::Server(message) => f.write_str(message),
        }
    }
}

/// An error shown next to a field, or at form level for [`ROOT_FIELD`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub field: &'static str,
    pub notice: Notice,
}

impl SessionError {
    pub fn new(field: &'static str, notice: impl Into<Notice>) -> Self {
        Self {
            field,
            notice: notice.into(),
        }
    }

    pub fn root(notice: impl Into<Notice>) -> Self {
        Self::new(ROOT_FIELD, notice)
    }

    pub fn is_root(&self) -> bool {
        self.field == ROOT_FIELD
    }
}

impl From<&FieldError> for SessionError {
    fn from(error: &FieldError) -> Self {
        SessionError::new(error.field, error.message)
    }
}
