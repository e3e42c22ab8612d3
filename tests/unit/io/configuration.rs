//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use minsquares::io::configuration::{
        BENCHMARK_SIZES, CHART_HEIGHT, CHART_MARGIN, CHART_WIDTH, RENDER_RESOLUTION,
        SQUARE_BORDER_WIDTH,
    };

    // Tests every benchmark size satisfies the core precondition
    // Verified by adding a unit size to the sweep
    #[test]
    fn test_benchmark_sizes_are_valid_inputs() {
        assert!(!BENCHMARK_SIZES.is_empty());
        for &size in BENCHMARK_SIZES {
            assert!(size > 1);
        }
    }

    // Tests the sweep includes the documented prime benchmark point
    // Verified by removing 13 from the size list
    #[test]
    fn test_benchmark_sizes_include_thirteen() {
        assert!(BENCHMARK_SIZES.contains(&13));
    }

    // Tests the chart plot area survives its margins
    // Verified by growing the margin past half the canvas
    #[test]
    fn test_chart_geometry() {
        assert!(CHART_MARGIN * 2 < CHART_WIDTH);
        assert!(CHART_MARGIN * 2 < CHART_HEIGHT);
    }

    // Tests render constants stay in drawable ranges
    // Verified by zeroing either constant
    #[test]
    fn test_render_constants() {
        assert!(RENDER_RESOLUTION > 0);
        assert!(SQUARE_BORDER_WIDTH > 0);
    }
}
