//! Per-flow policy for the verification controller

use ao_shared::{MessageKey, VerificationConfig};

use crate::domain::entities::FlowKind;

/// Where the code is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationSource {
    /// The user types the phone number into the form
    UserSupplied,
    /// The backend sends the code to the phone on the account
    Account,
}

/// Everything that differs between hosting flows as far as the controller is concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowPolicy {
    pub kind: FlowKind,
    /// Countdown used when the response has no usable `ExpiresIn`
    pub fallback_expiry_secs: u32,
    /// Minimum length of the entered code
    pub min_code_length: usize,
    pub destination: DestinationSource,
    /// Minimum length of a user-supplied destination
    pub min_destination_length: usize,
    /// Whether a channel must be picked before requesting
    pub channel_required: bool,
    /// Treat a rejected request carrying a positive expiry as "already sent"
    pub soft_success_on_already_sent: bool,
    /// Fallback message when a request-code call fails
    pub request_failed: MessageKey,
    /// Fallback message when a submit call fails
    pub submit_failed: MessageKey,
    /// Message shown after the dependent action succeeds
    pub submit_succeeded: MessageKey,
}

impl FlowPolicy {
    /// Policy for `kind` with the defaults from `config`
    pub fn for_flow(kind: FlowKind, config: &VerificationConfig) -> Self {
        let defaults = kind.defaults(config);
        let base = Self {
            kind,
            fallback_expiry_secs: defaults.fallback_expiry_secs,
            min_code_length: defaults.min_code_length,
            destination: DestinationSource::Account,
            min_destination_length: config.min_destination_length,
            channel_required: true,
            soft_success_on_already_sent: false,
            request_failed: MessageKey::OtpSendFailed,
            submit_failed: MessageKey::CommonError,
            submit_succeeded: MessageKey::OtpSentSuccess,
        };

        match kind {
            FlowKind::ForgotPassword => Self {
                destination: DestinationSource::UserSupplied,
                submit_failed: MessageKey::ResetFailed,
                submit_succeeded: MessageKey::ResetSuccess,
                ..base
            },
            FlowKind::ChangePassword => Self {
                request_failed: MessageKey::CommonError,
                submit_succeeded: MessageKey::PasswordChanged,
                ..base
            },
            FlowKind::ResetPin => Self {
                request_failed: MessageKey::TacRequestFailed,
                submit_failed: MessageKey::PinResetFailed,
                submit_succeeded: MessageKey::PinResetSuccess,
                ..base
            },
            FlowKind::Kyc => Self {
                destination: DestinationSource::UserSupplied,
                soft_success_on_already_sent: true,
                submit_failed: MessageKey::KycFailed,
                submit_succeeded: MessageKey::KycVerified,
                ..base
            },
            FlowKind::AddBankAccount => Self {
                channel_required: false,
                request_failed: MessageKey::TacRequestFailed,
                submit_failed: MessageKey::AddBankFailed,
                submit_succeeded: MessageKey::BankAccountAdded,
                ..base
            },
        }
    }

    /// Policy for `kind` with built-in defaults
    pub fn default_for(kind: FlowKind) -> Self {
        Self::for_flow(kind, &VerificationConfig::default())
    }

    /// Countdown to start after a dispatched code
    pub fn expiry_or_fallback(&self, expires_in: Option<u32>) -> u32 {
        expires_in
            .filter(|secs| *secs > 0)
            .unwrap_or(self.fallback_expiry_secs)
    }

    pub fn requires_destination(&self) -> bool {
        self.destination == DestinationSource::UserSupplied
    }
}
