//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error, ErrorKind, ErrorContext and Stage.

mod errors;
