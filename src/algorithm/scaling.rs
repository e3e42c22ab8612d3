//! Grid reduction by the largest proper divisor
//!
//! Dissection patterns are treated as invariant under uniform integer
//! scaling, so an input grid is shrunk to its irreducible core before the
//! search runs and the solution is scaled back up afterwards.

/// Outcome of reducing a grid to its irreducible core
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scaling {
    /// Uniform factor divided out of the input size
    pub factor: u32,
    /// Irreducible grid size handed to the search
    pub reduced_size: u32,
}

impl Scaling {
    /// Test whether the input grid was already irreducible
    pub const fn is_identity(&self) -> bool {
        self.factor == 1
    }
}

/// Reduce `grid_size` by its largest divisor no greater than half of it
///
/// Candidates are scanned from `grid_size / 2` downwards; 1 divides
/// everything, so the scan always lands on a factor of at least 1. Prime
/// sizes come back unchanged. Solving the reduced core and rescaling yields
/// a valid tiling of the input grid; whether it is also globally minimal
/// for composite sizes is an inherited heuristic assumption, not a proven
/// guarantee.
pub fn reduce(grid_size: u32) -> Scaling {
    for divisor in (1..=grid_size / 2).rev() {
        if grid_size % divisor == 0 {
            return Scaling {
                factor: divisor,
                reduced_size: grid_size / divisor,
            };
        }
    }
    Scaling {
        factor: 1,
        reduced_size: grid_size,
    }
}
