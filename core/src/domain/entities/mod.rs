//! Domain entities of the verification flows.

pub mod channel;
pub mod flow;
pub mod verification_session;

pub use channel::{Channel, ChannelOption, PLACEHOLDER_OPTION_VALUE};
pub use flow::FlowKind;
pub use verification_session::{SessionSnapshot, SessionStatus, VerificationSession};
