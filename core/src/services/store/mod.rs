//! Observable app-wide state shared between flows
//!
//! Each store wraps a `watch` channel so any number of screens can observe it.

mod auth_token;
mod kyc;
mod observable;

pub use auth_token::AuthTokenStore;
pub use kyc::{KycGate, KycGateDecision, KycStatusStore};
pub use observable::ObservableStore;
