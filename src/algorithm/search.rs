//! Branch-and-bound depth-first search over partial tilings
//!
//! The dominant component of the system. Each invocation finds the first
//! uncovered cell in canonical scan order, tries every square size that
//! fits there from largest to smallest, and recurses only while the branch
//! can still beat the best complete tiling seen so far.

use crate::io::trace::{TraceEvent, TraceSink};
use crate::spatial::{Square, Tiling};

/// Best complete tiling found so far and the pruning bound it implies
///
/// Holds an owned copy of the squares, never an alias: the working tiling
/// keeps mutating after a snapshot is taken.
#[derive(Clone, Debug)]
pub struct BestSolution {
    count: u32,
    squares: Vec<Square>,
}

impl BestSolution {
    /// Start with the loose upper bound `2 * grid_size + 1` and no squares
    pub const fn new(grid_size: u32) -> Self {
        Self {
            count: 2 * grid_size + 1,
            squares: Vec::new(),
        }
    }

    /// Record `tiling` if it beats the stored count, returning whether it did
    pub fn consider(&mut self, tiling: &Tiling) -> bool {
        let count = tiling.len() as u32;
        if count < self.count {
            self.count = count;
            self.squares = tiling.squares().to_vec();
            true
        } else {
            false
        }
    }

    /// Current square-count bound
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Squares of the best complete tiling, in placement order
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Consume the tracker, yielding the stored squares
    pub fn into_squares(self) -> Vec<Square> {
        self.squares
    }
}

/// One search run over a reduced grid
///
/// Owns every piece of mutable search state: the working tiling stack, the
/// best-solution tracker, and the step counter. Nothing is shared across
/// invocations, so a run is fully deterministic.
pub struct SearchSession<'a> {
    tiling: Tiling,
    best: BestSolution,
    steps: u64,
    trace: Option<&'a mut dyn TraceSink>,
}

impl<'a> SearchSession<'a> {
    /// Start a session from an already-seeded tiling
    pub fn new(tiling: Tiling, trace: Option<&'a mut dyn TraceSink>) -> Self {
        let best = BestSolution::new(tiling.grid_size());
        Self {
            tiling,
            best,
            steps: 0,
            trace,
        }
    }

    /// Run the search to exhaustion from the given scan resume point
    ///
    /// Returns the best solution tracker and the number of recursive steps
    /// taken. Termination is guaranteed: every placement strictly increases
    /// occupied area toward the grid total.
    pub fn run(mut self, resume: (u32, u32)) -> (BestSolution, u64) {
        self.backtrack(resume.0, resume.1);
        (self.best, self.steps)
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(sink) = self.trace.as_deref_mut() {
            sink.record(event);
        }
    }

    fn backtrack(&mut self, start_x: u32, start_y: u32) {
        self.steps += 1;
        let step = self.steps;
        self.emit(TraceEvent::Step { step });

        if self.tiling.is_complete() {
            self.record_complete();
            return;
        }

        // Only the first uncovered cell is branched on; deeper calls rescan
        // from the same resume point. The inner scan restarts at column 0
        // after the first row.
        let grid_size = self.tiling.grid_size();
        let mut scan_y = start_y;
        for x in start_x..grid_size {
            for y in scan_y..grid_size {
                if self.tiling.covers(x, y) {
                    continue;
                }
                let max_size = self.tiling.max_anchored_size(x, y);
                if max_size == 0 {
                    continue;
                }
                self.descend(x, y, max_size);
                return;
            }
            scan_y = 0;
        }
    }

    fn descend(&mut self, x: u32, y: u32, max_size: u32) {
        // Largest candidates first: they close more area per step, so the
        // bound tightens early.
        for size in (1..=max_size).rev() {
            let square = Square::new(x, y, size);
            self.tiling.push(square);
            self.emit(TraceEvent::Placed { square });

            if self.tiling.is_complete() {
                self.record_complete();
            } else if (self.tiling.len() as u32) < self.best.count() {
                self.backtrack(x, y);
            }

            self.tiling.pop();
            self.emit(TraceEvent::Removed { square });
        }
    }

    fn record_complete(&mut self) {
        if self.best.consider(&self.tiling) {
            let count = self.best.count();
            self.emit(TraceEvent::NewBest { count });
        }
    }
}
