//! Collaborator traits consumed by the verification controller

use async_trait::async_trait;

use ao_shared::validation::ValidationErrors;

use super::types::{CodeRequest, SubmitRequest};
use crate::domain::entities::ChannelOption;
use crate::domain::value_objects::{CodeResponse, SubmitResponse};
use crate::errors::GatewayError;

/// Form fields a hosting flow collects besides the code exchange itself
pub trait FlowFields: Send + Sync {
    /// Validate the fields; an empty collection means valid
    fn validate(&self) -> ValidationErrors;
}

impl FlowFields for () {
    fn validate(&self) -> ValidationErrors {
        ValidationErrors::new()
    }
}

/// The two backend operations of one hosting flow
#[async_trait]
pub trait VerificationGateway: Send + Sync {
    /// Extra fields sent with the request-code call (e.g. username, user id)
    type Context: FlowFields;
    /// Extra fields sent with the submit call (e.g. new password, PIN)
    type Submission: FlowFields;

    /// Dispatch a code to the selected channel
    async fn request_code(
        &self,
        request: &CodeRequest,
        context: &Self::Context,
    ) -> Result<CodeResponse, GatewayError>;

    /// Perform the dependent action with the entered code
    async fn submit(
        &self,
        request: &SubmitRequest,
        context: &Self::Context,
        submission: &Self::Submission,
    ) -> Result<SubmitResponse, GatewayError>;
}

/// Source of the delivery channels offered in the "send to" picker
#[async_trait]
pub trait ChannelOptionSource: Send + Sync {
    /// Fetch the options; failures degrade to an empty list
    async fn fetch_options(&self) -> Vec<ChannelOption>;
}
