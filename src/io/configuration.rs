//! Constants and runtime configuration defaults

// Benchmark sweep settings
/// Grid sizes exercised by the benchmark sweep; primes keep the search
/// irreducible, the leading composites exercise the scaling path
pub const BENCHMARK_SIZES: &[u32] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

// Dissection render settings
/// Approximate canvas edge for dissection renders, in pixels
pub const RENDER_RESOLUTION: u32 = 800;
/// Border drawn around each rendered square, in pixels
pub const SQUARE_BORDER_WIDTH: u32 = 3;
/// Fixed seed for the render color palette
pub const DEFAULT_SEED: u64 = 42;

// Chart settings
/// Chart canvas width in pixels
pub const CHART_WIDTH: u32 = 600;
/// Chart canvas height in pixels
pub const CHART_HEIGHT: u32 = 400;
/// Blank margin around the chart plot area, in pixels
pub const CHART_MARGIN: u32 = 40;
/// Half-edge of the square data markers, in pixels
pub const CHART_MARKER_RADIUS: u32 = 3;
/// Upper bound on tick intervals per chart axis
pub const CHART_MAX_TICKS: usize = 8;

// Progress bar display settings
/// Width of the sweep progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
