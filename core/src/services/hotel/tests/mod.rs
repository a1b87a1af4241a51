//! Tests for the hotel service

#[cfg(test)]
mod service_tests;
