//! Cross-layer integration tests for Parlance
//!
//! Tests that run the whole pipeline from paragraph text to class source.

mod canonical;
mod literals;
