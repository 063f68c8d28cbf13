//! Class description tree.
//!
//! [`ClassDecl`] is the only artifact passed from parsing to code
//! generation. It is built once by the parser and never mutated.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An opaque token span, kept verbatim for the output.
///
/// Expressions are never evaluated. They render as their tokens joined
/// with single spaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expr {
    tokens: Vec<String>,
}

impl Expr {
    /// Creates an expression from its tokens.
    #[must_use]
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Returns the tokens of this expression.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns true if the expression has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the tokens joined with single spaces.
    #[must_use]
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl<S: Into<String>> FromIterator<S> for Expr {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A property and its default value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyDecl {
    /// Property name.
    pub name: String,
    /// Default value text, rendered verbatim.
    pub default: String,
}

impl PropertyDecl {
    /// Creates a new property declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
        }
    }
}

/// One statement inside a method body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Print an expression.
    Print {
        /// What to print.
        expr: Expr,
    },
    /// Add an amount to a variable.
    Increase {
        /// Target variable.
        var: String,
        /// Amount to add.
        amount: Expr,
    },
    /// Subtract an amount from a variable.
    Decrease {
        /// Target variable.
        var: String,
        /// Amount to subtract.
        amount: Expr,
    },
    /// Assign an expression to a variable.
    Assign {
        /// Target variable.
        var: String,
        /// Assigned value.
        expr: Expr,
    },
    /// Return an expression.
    Return {
        /// Returned value.
        expr: Expr,
    },
    /// Invoke another method on the same object.
    Call {
        /// The invocation.
        expr: Expr,
    },
}

impl Action {
    /// Returns the kind of this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Print { .. } => ActionKind::Print,
            Self::Increase { .. } => ActionKind::Increase,
            Self::Decrease { .. } => ActionKind::Decrease,
            Self::Assign { .. } => ActionKind::Assign,
            Self::Return { .. } => ActionKind::Return,
            Self::Call { .. } => ActionKind::Call,
        }
    }
}

/// Fieldless mirror of [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionKind {
    /// [`Action::Print`]
    Print,
    /// [`Action::Increase`]
    Increase,
    /// [`Action::Decrease`]
    Decrease,
    /// [`Action::Assign`]
    Assign,
    /// [`Action::Return`]
    Return,
    /// [`Action::Call`]
    Call,
}

impl ActionKind {
    /// Returns a human-readable name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Assign => "assign",
            Self::Return => "return",
            Self::Call => "call",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A method: name, optional parameter, and its actions in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// The single parameter, if the method takes one.
    pub param: Option<String>,
    /// Actions in body order.
    pub actions: Vec<Action>,
}

impl MethodDecl {
    /// Creates a new method declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, param: Option<String>, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            param,
            actions,
        }
    }
}

/// A complete class description.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassDecl {
    name: String,
    properties: Vec<PropertyDecl>,
    methods: Vec<MethodDecl>,
}

impl ClassDecl {
    /// Creates a class description.
    ///
    /// `properties` keep declaration order; `methods` keep catalog order.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        properties: Vec<PropertyDecl>,
        methods: Vec<MethodDecl>,
    ) -> Self {
        Self {
            name: name.into(),
            properties,
            methods,
        }
    }

    /// Returns the class name as written in the paragraph.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDecl] {
        &self.properties
    }

    /// Returns the methods in catalog order.
    #[must_use]
    pub fn methods(&self) -> &[MethodDecl] {
        &self.methods
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }
}
