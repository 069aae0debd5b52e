//! Hosting flows that gate an action behind a one-time code.

use serde::{Deserialize, Serialize};

use ao_shared::{FlowDefaults, VerificationConfig};

/// The forms that embed a verification session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    ForgotPassword,
    ChangePassword,
    ResetPin,
    Kyc,
    AddBankAccount,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::ForgotPassword => "forgot_password",
            FlowKind::ChangePassword => "change_password",
            FlowKind::ResetPin => "reset_pin",
            FlowKind::Kyc => "kyc",
            FlowKind::AddBankAccount => "add_bank_account",
        }
    }

    /// Configured defaults for this flow
    pub fn defaults(&self, config: &VerificationConfig) -> FlowDefaults {
        match self {
            FlowKind::ForgotPassword => config.forgot_password,
            FlowKind::ChangePassword => config.change_password,
            FlowKind::ResetPin => config.reset_pin,
            FlowKind::Kyc => config.kyc,
            FlowKind::AddBankAccount => config.add_bank_account,
        }
    }
}

impl std::fmt::Display for FlowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
