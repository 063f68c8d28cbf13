//! Tracing system for Parlance.
//!
//! Records what each pipeline stage found, with zero overhead when
//! disabled. Records are kept in a bounded buffer and can be echoed to
//! stderr as they happen.
//!
//! # Example
//!
//! ```text
//! R0001 >> declaration
//! R0001    CLASS dog @1
//! R0001    PROPERTY mood = "happy"
//! R0001 << declaration
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use parlance_foundation::Stage;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write to stderr.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 4096,
            output: TraceOutput::None,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records pipeline events for one or more transpile runs.
///
/// The `record` method returns immediately if tracing is off.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_run: u64,
    start_time: Instant,
    formatter: HumanFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_run: 0,
            start_time: Instant::now(),
            formatter: HumanFormatter::new().with_timestamps(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Starts a new transpile run and returns its number.
    pub fn start_run(&mut self) -> u64 {
        self.current_run += 1;
        self.current_run
    }

    /// Returns the current run number.
    #[must_use]
    pub fn current_run(&self) -> u64 {
        self.current_run
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|f| f == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_run, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.formatter.format(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats the given records with the tracer's formatter.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        self.formatter.format_many(records)
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Records a stage start event.
    #[inline]
    pub fn stage_start(&mut self, stage: Stage) {
        self.record(TraceEvent::StageStart { stage });
    }

    /// Records a stage end event.
    #[inline]
    pub fn stage_end(&mut self, stage: Stage) {
        self.record(TraceEvent::StageEnd { stage });
    }

    /// Records a stage failure event.
    #[inline]
    pub fn stage_failed(&mut self, stage: Stage, message: impl Into<String>) {
        if self.is_enabled() {
            self.record(TraceEvent::StageFailed {
                stage,
                message: message.into(),
            });
        }
    }

    /// Records the class name found by the declaration parser.
    #[inline]
    pub fn class_found(&mut self, name: &str, at: usize) {
        if self.is_enabled() {
            self.record(TraceEvent::ClassFound {
                name: name.to_string(),
                at,
            });
        }
    }

    /// Records a parsed property.
    #[inline]
    pub fn property_parsed(&mut self, name: &str, default: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::PropertyParsed {
                name: name.to_string(),
                default: default.to_string(),
            });
        }
    }

    /// Records a declared method name.
    #[inline]
    pub fn method_declared(&mut self, name: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::MethodDeclared {
                name: name.to_string(),
            });
        }
    }

    /// Records a parsed method body.
    #[inline]
    pub fn method_body_parsed(&mut self, name: &str, param: Option<&str>, actions: usize) {
        if self.is_enabled() {
            self.record(TraceEvent::MethodBodyParsed {
                name: name.to_string(),
                param: param.map(str::to_string),
                actions,
            });
        }
    }

    /// Records a classified action span.
    #[inline]
    pub fn action_classified(&mut self, method: &str, kind: &'static str, at: usize) {
        if self.is_enabled() {
            self.record(TraceEvent::ActionClassified {
                method: method.to_string(),
                kind,
                at,
            });
        }
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}
