//! Transpiler facade and CLI for Parlance.
//!
//! This crate provides:
//! - [`Transpiler`] - Text in, class source out, with tracing and render
//!   settings taken from a [`TranspilerConfig`]
//! - The `parlance` command-line binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod transpiler;

pub use transpiler::{Transpiler, TranspilerConfig, transpile};
