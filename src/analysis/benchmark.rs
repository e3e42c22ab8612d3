//! Repeated invocation of the search across a list of grid sizes
//!
//! The sweep measures search effort, not wall time: the step counter is
//! deterministic for a given size, so runs are comparable across machines.

use crate::algorithm::dissection::minimum_dissection;
use crate::io::progress::SweepProgress;

/// One measured sweep entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Grid size handed to the search
    pub grid_size: u32,
    /// Recursive search invocations the size cost
    pub steps: u64,
    /// Squares in the minimal tiling found
    pub count: u32,
}

/// Run the search once per size, diagnostics off, collecting step counts
///
/// Sizes must all be greater than 1; the configured sweep and the CLI both
/// guarantee this.
pub fn sweep(sizes: &[u32], progress: Option<&SweepProgress>) -> Vec<Measurement> {
    let measurements = sizes
        .iter()
        .map(|&grid_size| {
            if let Some(bar) = progress {
                bar.start_size(grid_size);
            }
            let dissection = minimum_dissection(grid_size, None);
            if let Some(bar) = progress {
                bar.finish_size();
            }
            Measurement {
                grid_size,
                steps: dissection.steps,
                count: dissection.count,
            }
        })
        .collect();

    if let Some(bar) = progress {
        bar.finish();
    }

    measurements
}
