//! Integration tests for Layer 1: Language
//!
//! Tests for the class description tree and the code renderer, built by
//! hand without going through the parser.

mod ast;
