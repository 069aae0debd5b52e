//! Forgot password: reset the password of an account identified by username and phone

use std::sync::Arc;

use ao_shared::validation::{validators, ValidationErrors};
use ao_shared::{MessageKey, VerificationConfig};

use super::{MIN_PASSWORD_LENGTH, NEW_PASSWORD_FIELD, USERNAME_FIELD};
use crate::domain::entities::FlowKind;
use crate::services::verification::{
    FlowFields, FlowPolicy, VerificationController, VerificationGateway,
};

/// Sent with both the request-code and the reset call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordContext {
    pub username: String,
}

impl ForgotPasswordContext {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl FlowFields for ForgotPasswordContext {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if !validators::not_empty(&self.username) {
            errors.add(USERNAME_FIELD, MessageKey::UsernameRequired);
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordFields {
    pub new_password: String,
}

impl ForgotPasswordFields {
    pub fn new(new_password: impl Into<String>) -> Self {
        Self {
            new_password: new_password.into(),
        }
    }
}

impl FlowFields for ForgotPasswordFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if !validators::not_empty(&self.new_password) {
            errors.add(NEW_PASSWORD_FIELD, MessageKey::PasswordRequired);
        } else if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add(NEW_PASSWORD_FIELD, MessageKey::PasswordMinLength);
        }
        errors
    }
}

/// Controller for the forgot-password form
pub fn controller<G>(gateway: Arc<G>, config: &VerificationConfig) -> VerificationController<G>
where
    G: VerificationGateway<Context = ForgotPasswordContext, Submission = ForgotPasswordFields>,
{
    VerificationController::new(gateway, FlowPolicy::for_flow(FlowKind::ForgotPassword, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_is_required() {
        let errors = ForgotPasswordContext::new("  ").validate();
        assert_eq!(errors.for_field(USERNAME_FIELD), Some(MessageKey::UsernameRequired));
        assert!(ForgotPasswordContext::new("alice01").validate().is_empty());
    }

    #[test]
    fn test_new_password_rules() {
        assert_eq!(
            ForgotPasswordFields::new("").validate().for_field(NEW_PASSWORD_FIELD),
            Some(MessageKey::PasswordRequired)
        );
        assert_eq!(
            ForgotPasswordFields::new("abc12").validate().for_field(NEW_PASSWORD_FIELD),
            Some(MessageKey::PasswordMinLength)
        );
        assert!(ForgotPasswordFields::new("abc123").validate().is_empty());
    }
}
