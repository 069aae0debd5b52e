//! Hosting flows built on the verification controller
//!
//! Each flow defines the fields it collects on top of the code exchange and a
//! constructor wiring its [`FlowPolicy`](crate::services::verification::FlowPolicy).

pub mod add_bank_account;
pub mod change_password;
pub mod forgot_password;
pub mod kyc;
pub mod reset_pin;

pub use add_bank_account::BankAccountFields;
pub use change_password::ChangePasswordFields;
pub use forgot_password::{ForgotPasswordContext, ForgotPasswordFields};
pub use kyc::KycContext;
pub use reset_pin::{ResetPinFields, PIN_LENGTH};

/// Minimum length of a new password
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Field names reported in validation errors
pub const USERNAME_FIELD: &str = "username";
pub const OLD_PASSWORD_FIELD: &str = "oldPassword";
pub const NEW_PASSWORD_FIELD: &str = "newPassword";
pub const CONFIRM_PASSWORD_FIELD: &str = "confirmPassword";
pub const PIN_FIELD: &str = "pin";
pub const CONFIRM_PIN_FIELD: &str = "confirmPin";
pub const BANK_FIELD: &str = "bank";
pub const ACCOUNT_NAME_FIELD: &str = "accountName";
pub const ACCOUNT_NUMBER_FIELD: &str = "accountNumber";
