//! Progress display for the benchmark sweep

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar ticking once per swept grid size
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar sized for `total` sweep entries
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(SWEEP_STYLE.clone());
        Self { bar }
    }

    /// Announce the grid size currently being searched
    pub fn start_size(&self, grid_size: u32) {
        self.bar.set_message(format!("size {grid_size:>3}"));
    }

    /// Mark the current grid size as finished
    pub fn finish_size(&self) {
        self.bar.inc(1);
    }

    /// Clear the bar once the sweep completes
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
