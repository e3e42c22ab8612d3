//! Canonical three-square anchor seeding every search
//!
//! The grid has a fourfold rotational and reflective symmetry; fixing the
//! first three placements removes the duplicate branches that symmetry
//! would otherwise generate, and rules out the trivial single-square
//! covering by construction.

use crate::spatial::{Square, Tiling};

/// The fixed initial placement and the point where cell scanning resumes
#[derive(Clone, Debug)]
pub struct Anchor {
    /// Tiling holding the three anchor squares
    pub tiling: Tiling,
    /// `(x, y)` cell from which the uncovered-cell scan starts
    pub resume: (u32, u32),
}

/// Place the canonical anchor for a reduced grid of edge `reduced_size`
///
/// The main square of edge `ceil(R/2)` sits at the origin, flanked below
/// and to the right by two squares of edge `floor(R/2)`. For even grids the
/// three squares are equal and leave a single equal-size gap; for odd grids
/// they leave an L-shaped region for the search to close. Scanning resumes
/// at the bottom edge of the third square, in its column.
pub fn place(reduced_size: u32) -> Anchor {
    let main_size = reduced_size.div_ceil(2);
    let sub_size = reduced_size / 2;

    let mut tiling = Tiling::new(reduced_size);
    tiling.push(Square::new(0, 0, main_size));
    tiling.push(Square::new(0, main_size, sub_size));
    tiling.push(Square::new(main_size, 0, sub_size));

    Anchor {
        tiling,
        resume: (sub_size, main_size),
    }
}
