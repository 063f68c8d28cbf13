//! Pipeline stages.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A step of the paragraph-to-code pipeline.
///
/// Errors and trace events are tagged with the stage that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stage {
    /// Splitting raw text into paragraphs.
    Segmentation,
    /// Tokenizing and tagging a paragraph.
    Tagging,
    /// Class name and property sentence.
    Declaration,
    /// Method-names sentence.
    Catalog,
    /// Method definition sentences.
    MethodBody,
    /// Classifying a single action span.
    Action,
    /// Joining catalog and bodies into a class description.
    Assembly,
    /// Rendering the class description as code.
    Generation,
}

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Stage; 8] = [
        Stage::Segmentation,
        Stage::Tagging,
        Stage::Declaration,
        Stage::Catalog,
        Stage::MethodBody,
        Stage::Action,
        Stage::Assembly,
        Stage::Generation,
    ];

    /// Returns the short lowercase name of this stage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Segmentation => "segmentation",
            Self::Tagging => "tagging",
            Self::Declaration => "declaration",
            Self::Catalog => "method catalog",
            Self::MethodBody => "method body",
            Self::Action => "action",
            Self::Assembly => "assembly",
            Self::Generation => "generation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
