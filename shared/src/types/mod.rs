//! Type definitions module
//!
//! - `language` - Display language selection
//! - `response` - Envelopes returned by the platform REST API

pub mod language;
pub mod response;

pub use language::Language;
pub use response::{MessageSelectionOption, MessageSelectionResponse, TacResponse};
