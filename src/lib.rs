//! Minimal squared-square dissection search with bounded backtracking
//!
//! The system computes the minimum number of integer-sided squares needed
//! to dissect an N×N grid into strictly smaller squares that exactly tile
//! it. The input is first reduced by its largest proper divisor, a fixed
//! three-square anchor breaks the grid's symmetry, and a branch-and-bound
//! depth-first search closes the remaining region.

#![forbid(unsafe_code)]

/// Core search pipeline: reduction, anchoring, backtracking, packaging
pub mod algorithm;
/// Benchmark sweep over grid sizes
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for chart layout
pub mod math;
/// Squares and partial-tiling state
pub mod spatial;

pub use algorithm::dissection::{Dissection, minimum_dissection};
pub use io::error::{DissectionError, Result};
