//! Trace output formatters.

use std::fmt::Write;

use super::record::{TraceEvent, TraceRecord};

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records, one per line.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }

    fn describe(event: &TraceEvent) -> String {
        match event {
            TraceEvent::StageStart { stage } => format!(">> {stage}"),
            TraceEvent::StageEnd { stage } => format!("<< {stage}"),
            TraceEvent::StageFailed { stage, message } => {
                format!("!! {stage} FAILED: {message}")
            }
            TraceEvent::ParagraphsSplit { count } => format!("   paragraphs: {count}"),
            TraceEvent::TokensTagged { count } => format!("   tokens: {count}"),
            TraceEvent::ClassFound { name, at } => format!("   CLASS {name} @{at}"),
            TraceEvent::PropertyParsed { name, default } => {
                format!("   PROPERTY {name} = {default}")
            }
            TraceEvent::MethodDeclared { name } => format!("   METHOD {name}"),
            TraceEvent::MethodBodyParsed {
                name,
                param,
                actions,
            } => match param {
                Some(param) => format!("   BODY {name}({param}) [{actions} actions]"),
                None => format!("   BODY {name}() [{actions} actions]"),
            },
            TraceEvent::ActionClassified { method, kind, at } => {
                format!("     {method}: {kind} @{at}")
            }
            TraceEvent::CodeGenerated { lines } => format!("   generated {lines} lines"),
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "R{:04} ", record.run);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        format!("{prefix}{}", Self::describe(&record.event))
    }
}
