//! REST gateways for the verification flows
//!
//! Every flow talks to a request-code endpoint and a submit endpoint that
//! answer with the same `{Code, Message, ExpiresIn, Phone}` envelope. The
//! flows only differ in the JSON bodies they send, captured by [`FlowBodies`].

mod bodies;
mod rest;

#[cfg(test)]
mod tests;

pub use bodies::{
    AddBankAccountBodies, ChangePasswordBodies, FlowBodies, ForgotPasswordBodies, KycBodies,
    ResetPinBodies,
};
pub use rest::RestGateway;

pub type ForgotPasswordGateway = RestGateway<ForgotPasswordBodies>;
pub type ChangePasswordGateway = RestGateway<ChangePasswordBodies>;
pub type ResetPinGateway = RestGateway<ResetPinBodies>;
pub type KycGateway = RestGateway<KycBodies>;
pub type AddBankAccountGateway = RestGateway<AddBankAccountBodies>;
