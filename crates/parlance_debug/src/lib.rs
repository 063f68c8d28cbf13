//! Pipeline tracing for Parlance.
//!
//! This crate provides:
//! - [`Tracer`] - Records what each pipeline stage found
//! - [`TraceEvent`] / [`TraceRecord`] - The recorded events
//! - [`TraceFormatter`] / [`HumanFormatter`] - Text rendering of records

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter, TraceOutput,
    TraceRecord, Tracer, TracerConfig,
};
