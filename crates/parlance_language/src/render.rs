//! Code generation for class descriptions.
//!
//! Renders a [`ClassDecl`] as Python class source. Each node kind has one
//! template; rendering is deterministic and never fails.
//!
//! # Example
//!
//! ```
//! use parlance_language::ast::{Action, ClassDecl, MethodDecl, PropertyDecl};
//! use parlance_language::render::render;
//!
//! let class = ClassDecl::new(
//!     "dog",
//!     vec![PropertyDecl::new("energy", "100")],
//!     vec![MethodDecl::new(
//!         "rest",
//!         None,
//!         vec![Action::Return { expr: ["0"].into_iter().collect() }],
//!     )],
//! );
//! assert_eq!(
//!     render(&class),
//!     "class Dog:\n    energy = 100\n\n    def rest(self):\n        return 0\n\n"
//! );
//! ```

use crate::ast::{Action, ClassDecl, MethodDecl, PropertyDecl};

/// Configuration for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl RenderConfig {
    /// Builder method to set the indent width.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

/// Renders a class description with the default configuration.
#[must_use]
pub fn render(class: &ClassDecl) -> String {
    render_with_config(class, &RenderConfig::default())
}

/// Renders a class description with a custom configuration.
#[must_use]
pub fn render_with_config(class: &ClassDecl, config: &RenderConfig) -> String {
    let mut renderer = Renderer::new(config.clone());
    renderer.class(class);
    renderer.output
}

/// Renders a single action as one line of code, without indentation.
#[must_use]
pub fn render_action(action: &Action) -> String {
    match action {
        Action::Print { expr } => format!("print({expr})"),
        Action::Increase { var, amount } => format!("{var} += {amount}"),
        Action::Decrease { var, amount } => format!("{var} -= {amount}"),
        Action::Assign { var, expr } => format!("{var} = {expr}"),
        Action::Return { expr } => format!("return {expr}"),
        Action::Call { expr } => expr.joined(),
    }
}

/// Renders a method signature, without indentation.
#[must_use]
pub fn render_signature(method: &MethodDecl) -> String {
    match &method.param {
        Some(param) => format!("def {}(self, {param}):", method.name),
        None => format!("def {}(self):", method.name),
    }
}

/// Renders a property line, without indentation.
#[must_use]
pub fn render_property(property: &PropertyDecl) -> String {
    format!("{} = {}", property.name, property.default)
}

/// Title-cases a name the way Python's `str.title` does.
///
/// The first letter after any non-letter is uppercased; every other letter
/// is lowercased.
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_boundary = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}

/// Renderer state.
struct Renderer {
    config: RenderConfig,
    output: String,
    indent_level: usize,
}

impl Renderer {
    fn new(config: RenderConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
        }
    }

    fn class(&mut self, class: &ClassDecl) {
        self.line(&format!("class {}:", title_case(class.name())));
        self.indent_level += 1;

        for property in class.properties() {
            self.line(&render_property(property));
        }
        self.blank();

        for method in class.methods() {
            self.method(method);
        }

        self.indent_level -= 1;
    }

    /// Signature, one line per action, then a blank line.
    fn method(&mut self, method: &MethodDecl) {
        self.line(&render_signature(method));
        self.indent_level += 1;
        for action in &method.actions {
            self.line(&render_action(action));
        }
        self.indent_level -= 1;
        self.blank();
    }

    fn line(&mut self, text: &str) {
        let indent = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', indent));
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }
}
