//! Entry point: reduce, anchor, search, and rescale
//!
//! Wires the pipeline together and packages the result in original grid
//! units.

use crate::algorithm::search::SearchSession;
use crate::algorithm::{anchor, scaling};
use crate::io::trace::{TraceEvent, TraceSink};
use crate::spatial::Square;

/// A completed dissection of an N×N grid into smaller squares
#[derive(Clone, Debug)]
pub struct Dissection {
    /// Number of squares in the minimal tiling found
    pub count: u32,
    /// Recursive search invocations performed
    pub steps: u64,
    /// The tiling, expressed in original grid units
    pub squares: Vec<Square>,
}

/// Find the minimum-count dissection of a `grid_size` × `grid_size` grid
/// into strictly smaller integer squares
///
/// The caller guarantees `grid_size > 1`; the boundary (CLI) rejects
/// anything else before this function runs. The optional trace sink
/// receives structured search events and never influences the result.
pub fn minimum_dissection(
    grid_size: u32,
    mut trace: Option<&mut dyn TraceSink>,
) -> Dissection {
    debug_assert!(grid_size > 1, "grid size must exceed 1");

    let scaling = scaling::reduce(grid_size);
    let anchor = anchor::place(scaling.reduced_size);

    if let Some(sink) = trace.as_deref_mut() {
        for &square in anchor.tiling.squares() {
            sink.record(TraceEvent::Placed { square });
        }
    }

    let session = SearchSession::new(anchor.tiling, trace);
    let (best, steps) = session.run(anchor.resume);

    let count = best.count();
    let squares = best
        .into_squares()
        .iter()
        .map(|square| square.scaled(scaling.factor))
        .collect();

    Dissection {
        count,
        steps,
        squares,
    }
}
