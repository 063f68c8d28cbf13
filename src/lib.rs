//! Parlance - Structured English to class source transpiler
//!
//! This crate re-exports all layers of the Parlance system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: parlance_runtime    - Transpiler facade, CLI
//! Layer 2: parlance_parser     - Segmenter, tokenizer, tagger, stage parsers
//! Layer 1: parlance_language   - ClassDecl tree, code renderer
//!          parlance_debug      - Pipeline tracing
//! Layer 0: parlance_foundation - Error, ErrorKind, Stage
//! ```
//!
//! # Example
//!
//! ```
//! let code = parlance::transpile(
//!     "A cat is a class. It has lives = 9. It can nap. To nap return 0, end.",
//! )
//! .unwrap();
//! assert!(code.starts_with("class Cat:\n    lives = 9\n"));
//! ```

pub use parlance_debug as debug;
pub use parlance_foundation as foundation;
pub use parlance_language as language;
pub use parlance_parser as parser;
pub use parlance_runtime as runtime;

pub use parlance_foundation::{Error, ErrorKind, Result};
pub use parlance_runtime::{Transpiler, TranspilerConfig, transpile};
