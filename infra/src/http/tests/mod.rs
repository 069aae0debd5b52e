//! Tests for the platform API client

#[cfg(test)]
mod client_tests;
