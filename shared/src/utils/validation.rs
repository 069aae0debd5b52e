//! Field validation shared by the hosting forms

use crate::i18n::MessageKey;

/// A validation failure attached to a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: MessageKey,
}

impl FieldError {
    pub fn new(field: &'static str, message: MessageKey) -> Self {
        Self { field, message }
    }
}

/// Collection of field errors, in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: MessageKey) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First error reported for `field`
    pub fn for_field(&self, field: &str) -> Option<MessageKey> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not blank
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if the trimmed value has at least `min` characters
    pub fn min_trimmed_len(value: &str, min: usize) -> bool {
        value.trim().chars().count() >= min
    }

    /// Check if a value consists of exactly `len` ASCII digits
    pub fn is_digits_of_len(value: &str, len: usize) -> bool {
        value.len() == len && value.chars().all(|c| c.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_validators() {
        assert!(not_empty(" a "));
        assert!(!not_empty("   "));
        assert!(min_trimmed_len(" 1234 ", 4));
        assert!(!min_trimmed_len("12", 4));
        assert!(is_digits_of_len("123456", 6));
        assert!(!is_digits_of_len("12345a", 6));
        assert!(!is_digits_of_len("12345", 6));
    }

    #[test]
    fn test_validation_errors_collects_in_order() {
        let mut errors = ValidationErrors::new();
        assert!(errors.clone().into_result().is_ok());

        errors.add("newPassword", MessageKey::PasswordMinLength);
        errors.add("confirmPassword", MessageKey::PasswordsNoMatch);
        assert_eq!(errors.for_field("confirmPassword"), Some(MessageKey::PasswordsNoMatch));
        assert_eq!(errors.for_field("otpCode"), None);

        let list = errors.into_result().unwrap_err();
        assert_eq!(list[0].field, "newPassword");
        assert_eq!(list.len(), 2);
    }
}
