//! Tests for the verification controller

#[cfg(test)]
mod mocks;
