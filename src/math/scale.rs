//! Coordinate mapping helpers for chart layout

use num_traits::Float;

/// Map `value` from the `source` interval onto the `target` interval
///
/// Degenerate source intervals collapse to the start of the target, which
/// keeps single-point data sets renderable.
pub fn linear_map<T: Float>(value: T, source: (T, T), target: (T, T)) -> T {
    let span = source.1 - source.0;
    if span == T::zero() {
        return target.0;
    }
    target.0 + (value - source.0) / span * (target.1 - target.0)
}

/// Choose a 1/2/5-decade tick step covering `range` in at most `max_ticks`
/// intervals
///
/// Non-positive ranges and a zero tick budget fall back to a unit step.
pub fn tick_step(range: f64, max_ticks: usize) -> f64 {
    if range <= 0.0 || max_ticks == 0 {
        return 1.0;
    }
    let raw = range / max_ticks as f64;
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let multiplier = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    multiplier * magnitude
}
