//! Client services: the verification controller, its hosting flows and shared stores.

pub mod flows;
pub mod store;
pub mod verification;

// Re-export commonly used types
pub use store::{AuthTokenStore, KycGate, KycGateDecision, KycStatusStore, ObservableStore};
pub use verification::{
    format_countdown, ChannelOptionSource, CodeRequest, DestinationSource, FlowFields,
    FlowPolicy, RequestOutcome, SubmitOutcome, SubmitRequest, VerificationController,
    VerificationGateway,
};
