//! Unit tests for the per-flow request bodies

use serde_json::json;

use ao_core::domain::entities::Channel;
use ao_core::services::flows::{
    BankAccountFields, ChangePasswordFields, ForgotPasswordContext, ForgotPasswordFields,
    KycContext, ResetPinFields,
};
use ao_core::services::verification::{CodeRequest, SubmitRequest};
use ao_shared::{ApiConfig, HttpMethod};

use crate::gateways::{
    AddBankAccountBodies, ChangePasswordBodies, FlowBodies, ForgotPasswordBodies, KycBodies,
    ResetPinBodies,
};

fn code_request(destination: Option<&str>, channel: Option<Channel>) -> CodeRequest {
    CodeRequest {
        destination: destination.map(str::to_string),
        channel,
    }
}

fn submit_request(code: &str, destination: Option<&str>) -> SubmitRequest {
    SubmitRequest {
        code: code.to_string(),
        destination: destination.map(str::to_string),
        channel: Some(Channel::Sms),
    }
}

#[test]
fn test_forgot_password_bodies() {
    let context = ForgotPasswordContext::new(" alice01 ");
    let body = ForgotPasswordBodies::request_body(
        &code_request(Some("0123456789"), Some(Channel::Sms)),
        &context,
    );
    assert_eq!(
        body,
        Some(json!({"Username": "alice01", "Phone": "0123456789", "Option": "SMS"}))
    );

    let body = ForgotPasswordBodies::submit_body(
        &submit_request("1234", Some("0123456789")),
        &context,
        &ForgotPasswordFields::new("newpass1"),
    );
    assert_eq!(
        body,
        json!({"Username": "alice01", "Phone": "0123456789", "Tac": "1234", "Password": "newpass1"})
    );
    assert!(!ForgotPasswordBodies::AUTHENTICATED);
}

#[test]
fn test_kyc_bodies() {
    let context = KycContext::new("42");
    let body = KycBodies::request_body(
        &code_request(Some("0123456789"), Some(Channel::WhatsApp)),
        &context,
    );
    assert_eq!(
        body,
        Some(json!({"UserId": "42", "Phone": "0123456789", "Option": "WhatsApp"}))
    );

    let body = KycBodies::submit_body(&submit_request("5678", Some("0123456789")), &context, &());
    assert_eq!(body, json!({"UserId": "42", "Phone": "0123456789", "Tac": "5678"}));
}

#[test]
fn test_reset_pin_sends_channel_field() {
    let body = ResetPinBodies::request_body(&code_request(None, Some(Channel::Sms)), &());
    assert_eq!(body, Some(json!({"Channel": "SMS"})));

    let body = ResetPinBodies::submit_body(
        &submit_request("654321", None),
        &(),
        &ResetPinFields::new("123456", "123456"),
    );
    assert_eq!(body, json!({"Pin": "123456", "Tac": "654321"}));
}

#[test]
fn test_change_password_bodies() {
    let body = ChangePasswordBodies::request_body(&code_request(None, Some(Channel::Sms)), &());
    assert_eq!(body, Some(json!({"Option": "SMS"})));

    let fields = ChangePasswordFields {
        old_password: "old-secret".to_string(),
        new_password: "new-secret".to_string(),
        confirm_password: "new-secret".to_string(),
    };
    let body = ChangePasswordBodies::submit_body(&submit_request("9999", None), &(), &fields);
    assert_eq!(
        body,
        json!({"OldPassword": "old-secret", "NewPassword": "new-secret", "Tac": "9999"})
    );
}

#[test]
fn test_add_bank_account_request_is_bodiless_get() {
    let endpoints = AddBankAccountBodies::endpoints(&ApiConfig::default());
    assert_eq!(endpoints.request_method, HttpMethod::Get);
    assert_eq!(AddBankAccountBodies::request_body(&code_request(None, None), &()), None);

    let fields = BankAccountFields {
        bank_id: "7".to_string(),
        account_name: " Alice Tan ".to_string(),
        account_number: "1234567890".to_string(),
    };
    let body = AddBankAccountBodies::submit_body(&submit_request("112233", None), &(), &fields);
    assert_eq!(
        body,
        json!({"Name": "Alice Tan", "No": "1234567890", "Tac": "112233", "UserBankId": "7"})
    );
}
