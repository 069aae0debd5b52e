//! Reset the transaction PIN

use std::sync::Arc;

use ao_shared::validation::{validators, ValidationErrors};
use ao_shared::{MessageKey, VerificationConfig};

use super::{CONFIRM_PIN_FIELD, PIN_FIELD};
use crate::domain::entities::FlowKind;
use crate::services::verification::{
    FlowFields, FlowPolicy, VerificationController, VerificationGateway,
};

/// Number of digits in a transaction PIN
pub const PIN_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPinFields {
    pub pin: String,
    pub confirm_pin: String,
}

impl ResetPinFields {
    pub fn new(pin: impl Into<String>, confirm_pin: impl Into<String>) -> Self {
        Self {
            pin: pin.into(),
            confirm_pin: confirm_pin.into(),
        }
    }
}

impl FlowFields for ResetPinFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if !validators::is_digits_of_len(&self.pin, PIN_LENGTH) {
            errors.add(PIN_FIELD, MessageKey::PinInvalid);
        }
        if self.confirm_pin != self.pin {
            errors.add(CONFIRM_PIN_FIELD, MessageKey::PinsNoMatch);
        }
        errors
    }
}

/// Controller for the reset-PIN form
pub fn controller<G>(gateway: Arc<G>, config: &VerificationConfig) -> VerificationController<G>
where
    G: VerificationGateway<Context = (), Submission = ResetPinFields>,
{
    VerificationController::new(gateway, FlowPolicy::for_flow(FlowKind::ResetPin, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_must_be_six_digits() {
        assert_eq!(
            ResetPinFields::new("12345", "12345").validate().for_field(PIN_FIELD),
            Some(MessageKey::PinInvalid)
        );
        assert_eq!(
            ResetPinFields::new("12345a", "12345a").validate().for_field(PIN_FIELD),
            Some(MessageKey::PinInvalid)
        );
        assert!(ResetPinFields::new("123456", "123456").validate().is_empty());
    }

    #[test]
    fn test_confirmation_must_match() {
        let errors = ResetPinFields::new("123456", "654321").validate();
        assert_eq!(errors.for_field(PIN_FIELD), None);
        assert_eq!(errors.for_field(CONFIRM_PIN_FIELD), Some(MessageKey::PinsNoMatch));
    }
}
