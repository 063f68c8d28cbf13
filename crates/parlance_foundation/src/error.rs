//! Error types for the Parlance pipeline.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every failure is fatal for the paragraph being transpiled: there is no
//! partial output and no recovery mode.

use std::fmt;

use thiserror::Error;

use crate::stage::Stage;

/// Convenience result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Parlance operations.
#[derive(Debug, Error)]
#[error("{stage}: {kind}")]
pub struct Error {
    /// The pipeline stage that failed.
    pub stage: Stage,
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given stage and kind.
    #[must_use]
    pub fn new(stage: Stage, kind: ErrorKind) -> Self {
        Self {
            stage,
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing `class` keyword error.
    #[must_use]
    pub fn missing_class_keyword() -> Self {
        Self::new(Stage::Declaration, ErrorKind::MissingClassKeyword)
    }

    /// Creates a class name not found error for the `class` keyword at `at`.
    #[must_use]
    pub fn class_name_not_found(at: usize) -> Self {
        Self::new(Stage::Declaration, ErrorKind::ClassNameNotFound { at })
    }

    /// Creates a malformed property sentence error.
    #[must_use]
    pub fn malformed_property(at: usize, reason: impl Into<String>) -> Self {
        Self::new(
            Stage::Declaration,
            ErrorKind::MalformedPropertySentence {
                at,
                reason: reason.into(),
            },
        )
    }

    /// Creates an empty method list error.
    #[must_use]
    pub fn empty_method_list(at: usize) -> Self {
        Self::new(Stage::Catalog, ErrorKind::EmptyMethodList { at })
    }

    /// Creates an unterminated method body error.
    #[must_use]
    pub fn unterminated_body(method: impl Into<String>, at: usize) -> Self {
        Self::new(
            Stage::MethodBody,
            ErrorKind::UnterminatedMethodBody {
                method: method.into(),
                at,
            },
        )
    }

    /// Creates an unknown method reference error.
    #[must_use]
    pub fn unknown_method(method: impl Into<String>, reason: MethodMismatch, at: usize) -> Self {
        Self::new(
            Stage::Assembly,
            ErrorKind::UnknownMethodReference {
                method: method.into(),
                reason,
                at,
            },
        )
    }

    /// Creates a duplicate method body error.
    #[must_use]
    pub fn duplicate_body(method: impl Into<String>, at: usize) -> Self {
        Self::new(
            Stage::Assembly,
            ErrorKind::DuplicateMethodBody {
                method: method.into(),
                at,
            },
        )
    }

    /// Creates an unrecognized action error.
    #[must_use]
    pub fn unrecognized_action(method: impl Into<String>, span: impl Into<String>, at: usize) -> Self {
        Self::new(
            Stage::Action,
            ErrorKind::UnrecognizedAction {
                method: method.into(),
                span: span.into(),
                at,
            },
        )
    }

    /// Creates an unexpected token error.
    #[must_use]
    pub fn unexpected_token(
        stage: Stage,
        expected: impl Into<String>,
        found: impl Into<String>,
        at: usize,
    ) -> Self {
        Self::new(
            stage,
            ErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: found.into(),
                at,
            },
        )
    }

    /// Creates an unexpected end of input error.
    #[must_use]
    pub fn unexpected_end(stage: Stage, expected: impl Into<String>) -> Self {
        Self::new(
            stage,
            ErrorKind::UnexpectedEnd {
                expected: expected.into(),
            },
        )
    }

    /// Returns the token index the error points at, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.kind
            .position()
            .or_else(|| self.context.as_ref().and_then(|c| c.token_index))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The input contained no paragraph text.
    #[error("input is empty")]
    EmptyInput,

    /// The input contained more than one paragraph.
    #[error("expected exactly one class paragraph, found {count}")]
    MultipleParagraphs {
        /// Number of non-blank paragraphs found.
        count: usize,
    },

    /// The paragraph has no `class` keyword.
    #[error("missing `class` keyword")]
    MissingClassKeyword,

    /// No noun precedes the `class` keyword.
    #[error("no class name before `class` keyword at token {at}")]
    ClassNameNotFound {
        /// Index of the `class` keyword.
        at: usize,
    },

    /// The property sentence is malformed.
    #[error("malformed property sentence at token {at}: {reason}")]
    MalformedPropertySentence {
        /// Index of the offending token.
        at: usize,
        /// What was wrong.
        reason: String,
    },

    /// The method-names sentence declares no methods.
    #[error("no method names declared in sentence starting at token {at}")]
    EmptyMethodList {
        /// Index of the first token of the method-names sentence.
        at: usize,
    },

    /// A method body has no `, end` terminator.
    #[error("method body `{method}` starting at token {at} has no `, end` terminator")]
    UnterminatedMethodBody {
        /// Name of the method whose body is unterminated.
        method: String,
        /// Index of the `to` token that opened the body.
        at: usize,
    },

    /// Catalog and bodies disagree about a method name.
    #[error("method `{method}` at token {at} {reason}")]
    UnknownMethodReference {
        /// The mismatched method name.
        method: String,
        /// Which side is missing it.
        reason: MethodMismatch,
        /// Index of the body's `to` token, or of the name in the catalog.
        at: usize,
    },

    /// The same method has two bodies.
    #[error("method `{method}` is defined again at token {at}")]
    DuplicateMethodBody {
        /// The duplicated method name.
        method: String,
        /// Index of the second body's `to` token.
        at: usize,
    },

    /// An action span matches none of the known shapes.
    #[error("unrecognized action `{span}` in method `{method}` at token {at}")]
    UnrecognizedAction {
        /// Method containing the span.
        method: String,
        /// The span text, joined with spaces.
        span: String,
        /// Index of the first token of the span.
        at: usize,
    },

    /// A specific token was expected but another was found.
    #[error("expected {expected}, found `{found}` at token {at}")]
    UnexpectedToken {
        /// Description of what was expected.
        expected: String,
        /// The token actually found.
        found: String,
        /// Index of the found token.
        at: usize,
    },

    /// The paragraph ended while more tokens were expected.
    #[error("unexpected end of paragraph, expected {expected}")]
    UnexpectedEnd {
        /// Description of what was expected.
        expected: String,
    },
}

impl ErrorKind {
    /// Returns the token index carried by this kind, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::ClassNameNotFound { at }
            | Self::MalformedPropertySentence { at, .. }
            | Self::EmptyMethodList { at }
            | Self::UnterminatedMethodBody { at, .. }
            | Self::UnknownMethodReference { at, .. }
            | Self::DuplicateMethodBody { at, .. }
            | Self::UnrecognizedAction { at, .. }
            | Self::UnexpectedToken { at, .. } => Some(*at),
            Self::EmptyInput
            | Self::MultipleParagraphs { .. }
            | Self::MissingClassKeyword
            | Self::UnexpectedEnd { .. } => None,
        }
    }
}

/// Which side of the catalog/body pairing lacks a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodMismatch {
    /// A body defines a method the catalog never declared.
    NotDeclared,
    /// The catalog declares a method no body defines.
    NotDefined,
}

impl fmt::Display for MethodMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDeclared => write!(f, "is defined but not declared in the method list"),
            Self::NotDefined => write!(f, "is declared but has no definition"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Token index in the paragraph.
    pub token_index: Option<usize>,
    /// The offending token text.
    pub token: Option<String>,
    /// Nearby paragraph text.
    pub excerpt: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token position and text.
    #[must_use]
    pub fn with_token(mut self, index: usize, token: impl Into<String>) -> Self {
        self.token_index = Some(index);
        self.token = Some(token.into());
        self
    }

    /// Sets the excerpt.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.token_index, &self.token) {
            (Some(index), Some(token)) => write!(f, "at token {index} `{token}`")?,
            (Some(index), None) => write!(f, "at token {index}")?,
            _ => {}
        }
        if let Some(excerpt) = &self.excerpt {
            write!(f, "\n  near: {excerpt}")?;
        }
        Ok(())
    }
}
