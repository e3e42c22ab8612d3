//! Input/output operations and error handling

/// Benchmark chart rendering
pub mod chart;
/// Command-line interface and orchestration
pub mod cli;
/// Constants and configuration defaults
pub mod configuration;
/// Error types for the I/O boundary
pub mod error;
/// PNG rendering of completed dissections
pub mod image;
/// Progress display for benchmark sweeps
pub mod progress;
/// Search trace events and sinks
pub mod trace;
