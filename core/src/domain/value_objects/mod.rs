//! Value objects representing immutable domain concepts.

pub mod code_response;
pub mod notice;

pub use code_response::{CodeResponse, SubmitResponse};
pub use notice::{Notice, SessionError, CODE_FIELD, DESTINATION_FIELD, ROOT_FIELD};
