//! Common utility functions

pub mod phone;
pub mod validation;

pub use validation::{FieldError, ValidationErrors};
