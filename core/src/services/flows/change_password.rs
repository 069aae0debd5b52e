//! Change password for the signed-in user; the code goes to the account phone

use std::sync::Arc;

use ao_shared::validation::{validators, ValidationErrors};
use ao_shared::{MessageKey, VerificationConfig};

use super::{CONFIRM_PASSWORD_FIELD, MIN_PASSWORD_LENGTH, NEW_PASSWORD_FIELD, OLD_PASSWORD_FIELD};
use crate::domain::entities::FlowKind;
use crate::services::verification::{
    FlowFields, FlowPolicy, VerificationController, VerificationGateway,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordFields {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl FlowFields for ChangePasswordFields {
    /// Reports every invalid field at once
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if !validators::not_empty(&self.old_password) {
            errors.add(OLD_PASSWORD_FIELD, MessageKey::OldPasswordRequired);
        }

        if !validators::not_empty(&self.new_password) {
            errors.add(NEW_PASSWORD_FIELD, MessageKey::NewPasswordRequired);
        } else if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add(NEW_PASSWORD_FIELD, MessageKey::PasswordMinLength);
        }

        if !validators::not_empty(&self.confirm_password) {
            errors.add(CONFIRM_PASSWORD_FIELD, MessageKey::ConfirmPasswordRequired);
        } else if self.confirm_password != self.new_password {
            errors.add(CONFIRM_PASSWORD_FIELD, MessageKey::PasswordsNoMatch);
        }

        errors
    }
}

/// Controller for the change-password form
pub fn controller<G>(gateway: Arc<G>, config: &VerificationConfig) -> VerificationController<G>
where
    G: VerificationGateway<Context = (), Submission = ChangePasswordFields>,
{
    VerificationController::new(gateway, FlowPolicy::for_flow(FlowKind::ChangePassword, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(old: &str, new: &str, confirm: &str) -> ChangePasswordFields {
        ChangePasswordFields {
            old_password: old.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_all_fields_reported() {
        let errors = fields("", "", "").validate();
        assert_eq!(errors.errors().len(), 3);
        assert_eq!(errors.for_field(OLD_PASSWORD_FIELD), Some(MessageKey::OldPasswordRequired));
        assert_eq!(errors.for_field(NEW_PASSWORD_FIELD), Some(MessageKey::NewPasswordRequired));
        assert_eq!(
            errors.for_field(CONFIRM_PASSWORD_FIELD),
            Some(MessageKey::ConfirmPasswordRequired)
        );
    }

    #[test]
    fn test_mismatch_and_length() {
        let errors = fields("old", "short", "other").validate();
        assert_eq!(errors.for_field(NEW_PASSWORD_FIELD), Some(MessageKey::PasswordMinLength));
        assert_eq!(errors.for_field(CONFIRM_PASSWORD_FIELD), Some(MessageKey::PasswordsNoMatch));

        assert!(fields("old", "secret1", "secret1").validate().is_empty());
    }
}
