//! Translated message catalogue
//!
//! Messages are keyed by [`MessageKey`] and loaded from the catalogue embedded
//! at compile time. Lookups fall back to English, then to the raw key.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

use crate::types::Language;

/// Translations of a single message
#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub en: String,
    #[serde(default)]
    pub zh: Option<String>,
    #[serde(default)]
    pub ms: Option<String>,
}

impl Translation {
    fn get(&self, lang: Language) -> &str {
        let localized = match lang {
            Language::English => None,
            Language::Chinese => self.zh.as_deref(),
            Language::Malay => self.ms.as_deref(),
        };
        localized.unwrap_or(&self.en)
    }
}

type Catalogue = HashMap<String, HashMap<String, Translation>>;

static CATALOGUE: Lazy<Catalogue> = Lazy::new(|| {
    toml::from_str(include_str!("../../i18n/messages.toml")).unwrap_or_default()
});

/// Every message the verification flows can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    UsernameRequired,
    PhoneMinLength,
    PhoneInvalid,
    SelectOtpMethod,
    OtpSendFailed,
    OtpSentSuccess,
    OtpAlreadySent,
    RequestOtpFirst,
    OtpInvalid,
    ResetSuccess,
    ResetFailed,
    PasswordRequired,
    PasswordMinLength,
    PasswordsNoMatch,
    Sms,
    WhatsApp,
    OldPasswordRequired,
    NewPasswordRequired,
    ConfirmPasswordRequired,
    PasswordChanged,
    PinInvalid,
    PinsNoMatch,
    TacRequestFailed,
    PinResetFailed,
    PinResetSuccess,
    KycVerified,
    KycFailed,
    BankRequired,
    AccountNameRequired,
    AccountNumberRequired,
    AddBankFailed,
    BankAccountAdded,
    CommonError,
}

impl MessageKey {
    /// Dotted catalogue key
    pub fn key(&self) -> &'static str {
        match self {
            MessageKey::UsernameRequired => "auth.usernameRequired",
            MessageKey::PhoneMinLength => "auth.phoneMinLength",
            MessageKey::PhoneInvalid => "auth.phoneInvalid",
            MessageKey::SelectOtpMethod => "auth.selectOtpMethod",
            MessageKey::OtpSendFailed => "auth.otpSendFailed",
            MessageKey::OtpSentSuccess => "auth.otpSentSuccess",
            MessageKey::OtpAlreadySent => "auth.otpAlreadySent",
            MessageKey::RequestOtpFirst => "auth.requestOtpFirst",
            MessageKey::OtpInvalid => "auth.otpInvalid",
            MessageKey::ResetSuccess => "auth.resetSuccess",
            MessageKey::ResetFailed => "auth.resetFailed",
            MessageKey::PasswordRequired => "auth.passwordRequired",
            MessageKey::PasswordMinLength => "auth.passwordMinLength",
            MessageKey::PasswordsNoMatch => "auth.passwordsNoMatch",
            MessageKey::Sms => "auth.sms",
            MessageKey::WhatsApp => "auth.whatsapp",
            MessageKey::OldPasswordRequired => "profile.oldPasswordRequired",
            MessageKey::NewPasswordRequired => "profile.newPasswordRequired",
            MessageKey::ConfirmPasswordRequired => "profile.confirmPasswordRequired",
            MessageKey::PasswordChanged => "profile.passwordChanged",
            MessageKey::PinInvalid => "pin.invalid",
            MessageKey::PinsNoMatch => "pin.noMatch",
            MessageKey::TacRequestFailed => "pin.tacRequestFailed",
            MessageKey::PinResetFailed => "pin.resetFailed",
            MessageKey::PinResetSuccess => "pin.resetSuccess",
            MessageKey::KycVerified => "kyc.verified",
            MessageKey::KycFailed => "kyc.failed",
            MessageKey::BankRequired => "bank.bankRequired",
            MessageKey::AccountNameRequired => "bank.accountNameRequired",
            MessageKey::AccountNumberRequired => "bank.accountNumberRequired",
            MessageKey::AddBankFailed => "bank.addFailed",
            MessageKey::BankAccountAdded => "bank.added",
            MessageKey::CommonError => "common.error",
        }
    }

    /// Text in `lang`, falling back to English and then to the raw key
    pub fn translate(&self, lang: Language) -> String {
        match lookup(self.key()) {
            Some(translation) => translation.get(lang).to_string(),
            None => self.key().to_string(),
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

fn lookup(key: &str) -> Option<&'static Translation> {
    let (section, name) = key.split_once('.')?;
    CATALOGUE.get(section)?.get(name)
}
