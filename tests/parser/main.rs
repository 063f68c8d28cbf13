//! Integration tests for the parlance_parser crate.
//!
//! Tests for the class paragraph pipeline:
//! - Tokenization and tagging
//! - Declaration, catalog and body stages
//! - Action classification
//! - Full parser pipeline

mod action_tests;
mod parser_integration_tests;
mod stage_tests;
mod tokenizer_tests;
