//! Structured search trace events and pluggable sinks
//!
//! The search never prints; diagnostics flow through an injected sink so
//! they stay a pure side channel. Enabling or disabling tracing can never
//! change a computed result.

use crate::spatial::Square;

/// One event in the life of a search run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A recursive search invocation began
    Step {
        /// 1-based step ordinal
        step: u64,
    },
    /// A square was appended to the working tiling
    Placed {
        /// The placed square, in reduced grid units
        square: Square,
    },
    /// The most recently placed square was removed while backtracking
    Removed {
        /// The removed square, in reduced grid units
        square: Square,
    },
    /// A complete tiling improved on the best known square count
    NewBest {
        /// The new square-count bound
        count: u32,
    },
}

/// Receiver for search trace events
pub trait TraceSink {
    /// Record a single event
    fn record(&mut self, event: TraceEvent);
}

/// Sink that streams events to stderr in a terse log format
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrTrace;

impl TraceSink for StderrTrace {
    // Diagnostic output is this sink's entire purpose
    #[allow(clippy::print_stderr)]
    fn record(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Step { step } => eprintln!("[step {step}]"),
            TraceEvent::Placed { square } => eprintln!("[place {square}]"),
            TraceEvent::Removed { square } => eprintln!("[remove {square}]"),
            TraceEvent::NewBest { count } => eprintln!("[best {count}]"),
        }
    }
}

/// Sink that buffers events in memory for later inspection
///
/// Used by tests to assert that tracing is a pure side channel.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<TraceEvent>,
}

impl EventLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All recorded events in arrival order
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Number of `Step` events seen
    pub fn step_count(&self) -> u64 {
        self.events
            .iter()
            .filter(|event| matches!(event, TraceEvent::Step { .. }))
            .count() as u64
    }
}

impl TraceSink for EventLog {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
