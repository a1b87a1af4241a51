//! Tests for the booking service

#[cfg(test)]
mod service_tests;
