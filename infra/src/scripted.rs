//! In-memory gateway for development
//!
//! Accepts one fixed code and logs it instead of delivering it, so forms can be
//! exercised without the platform API.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use ao_core::domain::value_objects::{CodeResponse, SubmitResponse};
use ao_core::errors::GatewayError;
use ao_core::services::verification::{
    CodeRequest, FlowFields, SubmitRequest, VerificationGateway,
};
use ao_shared::phone::mask_phone_number;

/// Code accepted by default
pub const DEFAULT_SCRIPTED_CODE: &str = "123456";

pub struct ScriptedGateway<C = (), S = ()> {
    code: String,
    expires_in: Option<u32>,
    phone: Option<String>,
    requests: AtomicUsize,
    _fields: PhantomData<fn() -> (C, S)>,
}

impl<C, S> ScriptedGateway<C, S> {
    pub fn new() -> Self {
        Self {
            code: DEFAULT_SCRIPTED_CODE.to_string(),
            expires_in: Some(60),
            phone: None,
            requests: AtomicUsize::new(0),
            _fields: PhantomData,
        }
    }

    /// Accept `code` instead of the default
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Expiry reported with each dispatched code; `None` leaves it to the flow fallback
    pub fn with_expiry(mut self, expires_in: Option<u32>) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Report `phone` as the account phone the code went to
    pub fn with_account_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl<C, S> Default for ScriptedGateway<C, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<C: FlowFields, S: FlowFields> VerificationGateway for ScriptedGateway<C, S> {
    type Context = C;
    type Submission = S;

    async fn request_code(
        &self,
        request: &CodeRequest,
        _context: &C,
    ) -> Result<CodeResponse, GatewayError> {
        let count = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
        let destination = request
            .destination
            .as_deref()
            .or(self.phone.as_deref())
            .unwrap_or("account phone");

        tracing::info!(
            destination = %mask_phone_number(destination),
            channel = request.channel.as_ref().map(|c| c.as_str()).unwrap_or("-"),
            code = %self.code,
            request = count,
            event = "scripted_code_sent",
            "Scripted gateway issued a code"
        );

        let response = CodeResponse::sent(self.expires_in);
        Ok(match &self.phone {
            Some(phone) => response.with_destination(phone.clone()),
            None => response,
        })
    }

    async fn submit(
        &self,
        request: &SubmitRequest,
        _context: &C,
        _submission: &S,
    ) -> Result<SubmitResponse, GatewayError> {
        if request.code == self.code {
            Ok(SubmitResponse::accepted())
        } else {
            Ok(SubmitResponse::rejected(Some("Invalid TAC")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ao_core::domain::entities::Channel;

    #[tokio::test]
    async fn test_accepts_only_the_scripted_code() {
        let gateway: ScriptedGateway = ScriptedGateway::new().with_code("4321");
        let request = CodeRequest {
            destination: Some("0123456789".to_string()),
            channel: Some(Channel::Sms),
        };

        let response = gateway.request_code(&request, &()).await.unwrap();
        assert!(response.success);
        assert_eq!(response.expires_in, Some(60));
        assert_eq!(gateway.request_count(), 1);

        let mut submit = SubmitRequest {
            code: "0000".to_string(),
            destination: request.destination.clone(),
            channel: request.channel.clone(),
        };
        assert!(!gateway.submit(&submit, &(), &()).await.unwrap().success);

        submit.code = "4321".to_string();
        assert!(gateway.submit(&submit, &(), &()).await.unwrap().success);
    }

    #[tokio::test]
    async fn test_reports_account_phone() {
        let gateway: ScriptedGateway = ScriptedGateway::new()
            .with_expiry(None)
            .with_account_phone("60123456789");
        let request = CodeRequest {
            destination: None,
            channel: Some(Channel::Sms),
        };

        let response = gateway.request_code(&request, &()).await.unwrap();
        assert_eq!(response.expires_in, None);
        assert_eq!(response.destination.as_deref(), Some("60123456789"));
    }
}
