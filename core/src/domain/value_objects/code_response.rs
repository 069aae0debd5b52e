//! Results of the two collaborator operations of a verification flow.

use ao_shared::TacResponse;

/// Outcome of a request-code call as seen by the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeResponse {
    pub success: bool,
    pub message: Option<String>,
    /// Positive expiry in seconds, if the backend sent one
    pub expires_in: Option<u32>,
    /// Phone number the code went to, for flows using the account phone
    pub destination: Option<String>,
}

impl CodeResponse {
    pub fn sent(expires_in: Option<u32>) -> Self {
        Self {
            success: true,
            expires_in: expires_in.filter(|secs| *secs > 0),
            ..Default::default()
        }
    }

    pub fn rejected(message: Option<&str>, expires_in: Option<u32>) -> Self {
        Self {
            success: false,
            message: message.map(str::to_string),
            expires_in: expires_in.filter(|secs| *secs > 0),
            destination: None,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }
}

impl From<TacResponse> for CodeResponse {
    fn from(response: TacResponse) -> Self {
        Self {
            success: response.is_success(),
            message: response.message().map(str::to_string),
            expires_in: response.usable_expiry(),
            destination: response.phone.filter(|p| !p.trim().is_empty()),
        }
    }
}

/// Outcome of a submit call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl SubmitResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: Option<&str>) -> Self {
        Self {
            success: false,
            message: message.map(str::to_string),
        }
    }
}

impl From<TacResponse> for SubmitResponse {
    fn from(response: TacResponse) -> Self {
        Self {
            success: response.is_success(),
            message: response.message().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tac_response() {
        let response = CodeResponse::from(TacResponse {
            code: 3,
            message: Some("Please wait".to_string()),
            expires_in: Some(45),
            phone: Some(String::new()),
        });
        assert!(!response.success);
        assert_eq!(response.expires_in, Some(45));
        assert_eq!(response.message.as_deref(), Some("Please wait"));
        assert_eq!(response.destination, None);
    }

    #[test]
    fn test_zero_expiry_is_dropped() {
        assert_eq!(CodeResponse::sent(Some(0)).expires_in, None);
        assert_eq!(CodeResponse::rejected(None, Some(0)).expires_in, None);
    }
}
