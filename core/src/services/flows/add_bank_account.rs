//! Add a bank account; the code goes to the account phone without a channel choice

use std::sync::Arc;

use ao_shared::validation::{validators, ValidationErrors};
use ao_shared::{MessageKey, VerificationConfig};

use super::{ACCOUNT_NAME_FIELD, ACCOUNT_NUMBER_FIELD, BANK_FIELD};
use crate::domain::entities::FlowKind;
use crate::services::verification::{
    FlowFields, FlowPolicy, VerificationController, VerificationGateway,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankAccountFields {
    /// Identifier of the bank picked from the bank list
    pub bank_id: String,
    pub account_name: String,
    pub account_number: String,
}

impl FlowFields for BankAccountFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if !validators::not_empty(&self.bank_id) {
            errors.add(BANK_FIELD, MessageKey::BankRequired);
        }
        if !validators::not_empty(&self.account_name) {
            errors.add(ACCOUNT_NAME_FIELD, MessageKey::AccountNameRequired);
        }
        if !validators::not_empty(&self.account_number) {
            errors.add(ACCOUNT_NUMBER_FIELD, MessageKey::AccountNumberRequired);
        }
        errors
    }
}

/// Controller for the add-bank-account form
pub fn controller<G>(gateway: Arc<G>, config: &VerificationConfig) -> VerificationController<G>
where
    G: VerificationGateway<Context = (), Submission = BankAccountFields>,
{
    VerificationController::new(gateway, FlowPolicy::for_flow(FlowKind::AddBankAccount, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let errors = BankAccountFields::default().validate();
        assert_eq!(errors.errors().len(), 3);

        let fields = BankAccountFields {
            bank_id: "12".to_string(),
            account_name: "Alice Tan".to_string(),
            account_number: "1234567890".to_string(),
        };
        assert!(fields.validate().is_empty());
    }
}
