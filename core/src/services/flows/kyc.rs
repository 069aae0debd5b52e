//! KYC phone verification; a verified result flips the app-wide KYC status

use std::sync::Arc;

use ao_shared::validation::ValidationErrors;
use ao_shared::VerificationConfig;

use crate::domain::entities::FlowKind;
use crate::services::store::KycStatusStore;
use crate::services::verification::{
    FlowFields, FlowPolicy, VerificationController, VerificationGateway,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KycContext {
    pub user_id: String,
}

impl KycContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl FlowFields for KycContext {
    fn validate(&self) -> ValidationErrors {
        // The user id comes from the signed-in profile, not from the form
        ValidationErrors::new()
    }
}

/// Controller for the KYC form; marks `status` verified on success
pub fn controller<G>(
    gateway: Arc<G>,
    config: &VerificationConfig,
    status: Arc<KycStatusStore>,
) -> VerificationController<G>
where
    G: VerificationGateway<Context = KycContext, Submission = ()>,
{
    VerificationController::new(gateway, FlowPolicy::for_flow(FlowKind::Kyc, config))
        .on_verified(move |_| status.set_verified(true))
}
