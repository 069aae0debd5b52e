use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use ao_core::domain::value_objects::{CodeResponse, SubmitResponse};
use ao_core::errors::GatewayError;
use ao_core::services::verification::{CodeRequest, SubmitRequest, VerificationGateway};
use ao_shared::{EndpointConfig, TacResponse};

use super::bodies::FlowBodies;
use crate::http::ApiClient;

/// Verification gateway backed by the platform REST API
pub struct RestGateway<B: FlowBodies> {
    client: Arc<ApiClient>,
    endpoints: EndpointConfig,
    _bodies: PhantomData<fn() -> B>,
}

impl<B: FlowBodies> RestGateway<B> {
    /// Gateway using the endpoints configured for the flow
    pub fn new(client: Arc<ApiClient>) -> Self {
        let endpoints = B::endpoints(client.config());
        Self::with_endpoints(client, endpoints)
    }

    pub fn with_endpoints(client: Arc<ApiClient>, endpoints: EndpointConfig) -> Self {
        Self {
            client,
            endpoints,
            _bodies: PhantomData,
        }
    }

    pub fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }
}

#[async_trait]
impl<B: FlowBodies> VerificationGateway for RestGateway<B> {
    type Context = B::Context;
    type Submission = B::Submission;

    async fn request_code(
        &self,
        request: &CodeRequest,
        context: &B::Context,
    ) -> Result<CodeResponse, GatewayError> {
        let body = B::request_body(request, context);
        let response: TacResponse = self
            .client
            .send(
                self.endpoints.request_method,
                &self.endpoints.request_code,
                body.as_ref(),
                B::AUTHENTICATED,
            )
            .await?;

        tracing::debug!(
            flow = %B::KIND,
            code = response.code,
            expires_in = ?response.expires_in,
            event = "tac_response",
            "Request-code envelope received"
        );
        Ok(CodeResponse::from(response))
    }

    async fn submit(
        &self,
        request: &SubmitRequest,
        context: &B::Context,
        submission: &B::Submission,
    ) -> Result<SubmitResponse, GatewayError> {
        let body = B::submit_body(request, context, submission);
        let response: TacResponse = self
            .client
            .send(
                self.endpoints.submit_method,
                &self.endpoints.submit,
                Some(&body),
                B::AUTHENTICATED,
            )
            .await?;

        tracing::debug!(
            flow = %B::KIND,
            code = response.code,
            event = "submit_response",
            "Submit envelope received"
        );
        Ok(SubmitResponse::from(response))
    }
}
