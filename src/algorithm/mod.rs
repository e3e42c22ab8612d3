/// Canonical symmetry-breaking initial placement
pub mod anchor;
/// Pipeline entry point and result packaging
pub mod dissection;
/// Grid reduction by the largest proper divisor
pub mod scaling;
/// Branch-and-bound depth-first search
pub mod search;
