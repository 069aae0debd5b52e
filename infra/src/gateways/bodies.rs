use serde_json::{json, Value};

use ao_core::domain::entities::FlowKind;
use ao_core::services::flows::{
    BankAccountFields, ChangePasswordFields, ForgotPasswordContext, ForgotPasswordFields,
    KycContext, ResetPinFields,
};
use ao_core::services::verification::{CodeRequest, FlowFields, SubmitRequest};
use ao_shared::{ApiConfig, EndpointConfig};

/// Request bodies and endpoints of one flow
pub trait FlowBodies: Send + Sync + 'static {
    type Context: FlowFields;
    type Submission: FlowFields;

    const KIND: FlowKind;

    /// Whether calls carry the bearer token
    const AUTHENTICATED: bool = true;

    fn endpoints(config: &ApiConfig) -> EndpointConfig;

    /// Body of the request-code call; `None` for bodiless GETs
    fn request_body(request: &CodeRequest, context: &Self::Context) -> Option<Value>;

    fn submit_body(
        request: &SubmitRequest,
        context: &Self::Context,
        submission: &Self::Submission,
    ) -> Value;
}

fn channel(request: &CodeRequest) -> &str {
    request.channel.as_ref().map(|c| c.as_str()).unwrap_or_default()
}

fn destination(request: Option<&String>) -> &str {
    request.map(String::as_str).unwrap_or_default()
}

pub struct ForgotPasswordBodies;

impl FlowBodies for ForgotPasswordBodies {
    type Context = ForgotPasswordContext;
    type Submission = ForgotPasswordFields;

    const KIND: FlowKind = FlowKind::ForgotPassword;
    const AUTHENTICATED: bool = false;

    fn endpoints(config: &ApiConfig) -> EndpointConfig {
        config.endpoints.forgot_password.clone()
    }

    fn request_body(request: &CodeRequest, context: &ForgotPasswordContext) -> Option<Value> {
        Some(json!({
            "Username": context.username.trim(),
            "Phone": destination(request.destination.as_ref()),
            "Option": channel(request),
        }))
    }

    fn submit_body(
        request: &SubmitRequest,
        context: &ForgotPasswordContext,
        submission: &ForgotPasswordFields,
    ) -> Value {
        json!({
            "Username": context.username.trim(),
            "Phone": destination(request.destination.as_ref()),
            "Tac": request.code,
            "Password": submission.new_password,
        })
    }
}

pub struct ChangePasswordBodies;

impl FlowBodies for ChangePasswordBodies {
    type Context = ();
    type Submission = ChangePasswordFields;

    const KIND: FlowKind = FlowKind::ChangePassword;

    fn endpoints(config: &ApiConfig) -> EndpointConfig {
        config.endpoints.change_password.clone()
    }

    fn request_body(request: &CodeRequest, _context: &()) -> Option<Value> {
        Some(json!({ "Option": channel(request) }))
    }

    fn submit_body(
        request: &SubmitRequest,
        _context: &(),
        submission: &ChangePasswordFields,
    ) -> Value {
        json!({
            "OldPassword": submission.old_password,
            "NewPassword": submission.new_password,
            "Tac": request.code,
        })
    }
}

pub struct ResetPinBodies;

impl FlowBodies for ResetPinBodies {
    type Context = ();
    type Submission = ResetPinFields;

    const KIND: FlowKind = FlowKind::ResetPin;

    fn endpoints(config: &ApiConfig) -> EndpointConfig {
        config.endpoints.reset_pin.clone()
    }

    fn request_body(request: &CodeRequest, _context: &()) -> Option<Value> {
        Some(json!({ "Channel": channel(request) }))
    }

    fn submit_body(request: &SubmitRequest, _context: &(), submission: &ResetPinFields) -> Value {
        json!({
            "Pin": submission.pin,
            "Tac": request.code,
        })
    }
}

pub struct KycBodies;

impl FlowBodies for KycBodies {
    type Context = KycContext;
    type Submission = ();

    const KIND: FlowKind = FlowKind::Kyc;

    fn endpoints(config: &ApiConfig) -> EndpointConfig {
        config.endpoints.kyc.clone()
    }

    fn request_body(request: &CodeRequest, context: &KycContext) -> Option<Value> {
        Some(json!({
            "UserId": context.user_id,
            "Phone": destination(request.destination.as_ref()),
            "Option": channel(request),
        }))
    }

    fn submit_body(request: &SubmitRequest, context: &KycContext, _submission: &()) -> Value {
        json!({
            "UserId": context.user_id,
            "Phone": destination(request.destination.as_ref()),
            "Tac": request.code,
        })
    }
}

pub struct AddBankAccountBodies;

impl FlowBodies for AddBankAccountBodies {
    type Context = ();
    type Submission = BankAccountFields;

    const KIND: FlowKind = FlowKind::AddBankAccount;

    fn endpoints(config: &ApiConfig) -> EndpointConfig {
        config.endpoints.add_bank_account.clone()
    }

    fn request_body(_request: &CodeRequest, _context: &()) -> Option<Value> {
        None
    }

    fn submit_body(
        request: &SubmitRequest,
        _context: &(),
        submission: &BankAccountFields,
    ) -> Value {
        json!({
            "Name": submission.account_name.trim(),
            "No": submission.account_number.trim(),
            "Tac": request.code,
            "UserBankId": submission.bank_id,
        })
    }
}
