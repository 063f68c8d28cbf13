//! Class paragraph parser for Parlance.
//!
//! This crate turns one paragraph of structured English into a
//! [`ClassDecl`](parlance_language::ClassDecl).
//!
//! # Architecture
//!
//! ```text
//! "A dog is a class. He has mood = "happy". He can bark. To bark ..."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SEGMENTER     │  → exactly one paragraph
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TOKENIZER +     │  → [a/DT, dog/NN, is/VBZ, a/DT, class/NN, ./. ...]
//! │ TAGGER          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DECLARATION     │  → name: dog, properties: [mood = "happy"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CATALOG         │  → [bark]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ BODIES +        │  → bark: [Print("barf"), Decrease(self.energy, 1)]
//! │ ACTIONS         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ASSEMBLY        │  → ClassDecl, methods in catalog order
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`segment`] - Split input text into paragraphs
//! - [`tokenizer`] - Convert a paragraph to a token stream
//! - [`tagger`] - Part-of-speech tags and the [`Tagger`] trait
//! - [`lexicon`] - Standard English word lists for [`LexiconTagger`]
//! - [`cursor`] - Token cursor shared by the stage parsers
//! - [`declaration`] - Class name and property sentence
//! - [`catalog`] - Method catalog sentence
//! - [`body`] - Method body sentences
//! - [`action`] - Action span classification
//! - [`parser`] - Pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod body;
pub mod catalog;
pub mod cursor;
pub mod declaration;
pub mod lexicon;
pub mod parser;
pub mod segment;
pub mod tagger;
pub mod tokenizer;


// Re-export main types for convenience
pub use action::{classify, classify_words};
pub use body::MethodBody;
pub use catalog::CatalogEntry;
pub use cursor::TokenCursor;
pub use declaration::{Declaration, normalize_quote_artifact};
pub use parser::{ClassParser, assemble};
pub use segment::{non_blank_paragraphs, split_paragraphs};
pub use tagger::{LexiconTagger, Tag, TaggedToken, Tagger};
pub use tokenizer::{Token, WordTokenizer};
