//! Tests for the REST gateways

#[cfg(test)]
mod bodies_tests;
