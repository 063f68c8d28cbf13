//! Core error and stage types for Parlance.
//!
//! This crate provides:
//! - [`Error`] - The pipeline error, with the failing [`Stage`] and context
//! - [`ErrorKind`] - Categorized parse failures for pattern matching
//! - [`Stage`] - Names for each step of the paragraph-to-code pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod stage;

pub use error::{Error, ErrorContext, ErrorKind, MethodMismatch, Result};
pub use stage::Stage;
