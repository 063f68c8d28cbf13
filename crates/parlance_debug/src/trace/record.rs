//! Trace event and record types.
//!
//! This module defines the events recorded while a paragraph moves through
//! the pipeline.

use parlance_foundation::Stage;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced while transpiling a paragraph.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// A pipeline stage has started.
    StageStart {
        /// The stage that started.
        stage: Stage,
    },

    /// A pipeline stage has finished successfully.
    StageEnd {
        /// The stage that finished.
        stage: Stage,
    },

    /// A pipeline stage has failed.
    StageFailed {
        /// The stage that failed.
        stage: Stage,
        /// The rendered error message.
        message: String,
    },

    /// Raw input was split into paragraphs.
    ParagraphsSplit {
        /// Number of non-blank paragraphs.
        count: usize,
    },

    /// A paragraph was tokenized and tagged.
    TokensTagged {
        /// Number of tokens produced.
        count: usize,
    },

    /// The class name was located.
    ClassFound {
        /// The class name as written (lowercase).
        name: String,
        /// Token index of the name.
        at: usize,
    },

    /// A property and its default were read.
    PropertyParsed {
        /// Property name.
        name: String,
        /// Default expression text.
        default: String,
    },

    /// A method name was read from the method-names sentence.
    MethodDeclared {
        /// Method name.
        name: String,
    },

    /// A method body was parsed.
    MethodBodyParsed {
        /// Method name.
        name: String,
        /// Parameter name, if the method takes one.
        param: Option<String>,
        /// Number of actions in the body.
        actions: usize,
    },

    /// An action span was classified.
    ActionClassified {
        /// Method the action belongs to.
        method: String,
        /// Name of the action kind (`print`, `assign`, ...).
        kind: &'static str,
        /// Token index where the span starts.
        at: usize,
    },

    /// Code was rendered from the class description.
    CodeGenerated {
        /// Number of output lines.
        lines: usize,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::StageStart { .. } => "stage-start",
            Self::StageEnd { .. } => "stage-end",
            Self::StageFailed { .. } => "stage-failed",
            Self::ParagraphsSplit { .. } => "paragraphs-split",
            Self::TokensTagged { .. } => "tokens-tagged",
            Self::ClassFound { .. } => "class-found",
            Self::PropertyParsed { .. } => "property-parsed",
            Self::MethodDeclared { .. } => "method-declared",
            Self::MethodBodyParsed { .. } => "method-body-parsed",
            Self::ActionClassified { .. } => "action-classified",
            Self::CodeGenerated { .. } => "code-generated",
        }
    }

    /// Returns true if this is a stage boundary event.
    #[must_use]
    pub fn is_stage_boundary(&self) -> bool {
        matches!(
            self,
            Self::StageStart { .. } | Self::StageEnd { .. } | Self::StageFailed { .. }
        )
    }

    /// Returns the stage this event belongs to, when it names one.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::StageStart { stage } | Self::StageEnd { stage } | Self::StageFailed { stage, .. } => {
                Some(*stage)
            }
            Self::ParagraphsSplit { .. } => Some(Stage::Segmentation),
            Self::TokensTagged { .. } => Some(Stage::Tagging),
            Self::ClassFound { .. } | Self::PropertyParsed { .. } => Some(Stage::Declaration),
            Self::MethodDeclared { .. } => Some(Stage::Catalog),
            Self::MethodBodyParsed { .. } => Some(Stage::MethodBody),
            Self::ActionClassified { .. } => Some(Stage::Action),
            Self::CodeGenerated { .. } => Some(Stage::Generation),
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the tracer.
    pub id: u64,
    /// The transpile run this event belongs to.
    pub run: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, run: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            run,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
