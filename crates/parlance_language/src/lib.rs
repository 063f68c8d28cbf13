//! Class description tree and code generation for Parlance.
//!
//! This crate provides:
//! - [`ClassDecl`] - The parsed description of one class
//! - [`render`] - Rendering a class description as Python source

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod render;

pub use ast::{Action, ActionKind, ClassDecl, Expr, MethodDecl, PropertyDecl};
pub use render::{RenderConfig, render, render_with_config, title_case};
