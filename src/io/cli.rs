//! Command-line interface for the dissection search

use crate::algorithm::dissection::{Dissection, minimum_dissection};
use crate::analysis::benchmark::sweep;
use crate::io::chart::render_step_chart;
use crate::io::configuration::{BENCHMARK_SIZES, DEFAULT_SEED};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::render_dissection;
use crate::io::progress::SweepProgress;
use crate::io::trace::{StderrTrace, TraceSink};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the dissection tool
#[derive(Parser)]
#[command(name = "minsquares")]
#[command(
    author,
    version,
    about = "Dissect an N×N grid into the fewest integer-sided squares"
)]
pub struct Cli {
    /// Grid edge length to dissect (must be greater than 1)
    #[arg(value_name = "SIZE")]
    pub size: u32,

    /// Write a PNG render of the dissection to this path
    #[arg(short, long, value_name = "FILE")]
    pub visualize: Option<PathBuf>,

    /// Run the benchmark sweep and write a size/step-count chart to this path
    #[arg(short, long, value_name = "FILE")]
    pub analyze: Option<PathBuf>,

    /// Stream search trace events to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Seed for the render color palette
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one invocation: validate, sweep, search, report, render
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested work
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size fails validation or if a chart or
    /// render cannot be written.
    pub fn run(&self) -> Result<()> {
        if self.cli.size <= 1 {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &"grid size must be a natural number greater than 1",
            ));
        }

        if let Some(chart_path) = &self.cli.analyze {
            let progress = self
                .cli
                .should_show_progress()
                .then(|| SweepProgress::new(BENCHMARK_SIZES.len()));
            let measurements = sweep(BENCHMARK_SIZES, progress.as_ref());
            render_step_chart(&measurements, chart_path)?;
        }

        let mut stderr_trace = StderrTrace;
        let trace: Option<&mut dyn TraceSink> = if self.cli.debug {
            Some(&mut stderr_trace)
        } else {
            None
        };

        let dissection = minimum_dissection(self.cli.size, trace);
        Self::report(&dissection);

        if let Some(render_path) = &self.cli.visualize {
            render_dissection(
                &dissection.squares,
                self.cli.size,
                self.cli.seed,
                render_path,
            )?;
        }

        Ok(())
    }

    // Result summary is user-facing output, not diagnostics
    #[allow(clippy::print_stdout)]
    fn report(dissection: &Dissection) {
        println!("Minimum squares: {}", dissection.count);
        println!("Search steps: {}", dissection.steps);
        println!("Squares (x y size):");
        for square in &dissection.squares {
            println!("  {} {} {}", square.x, square.y, square.size);
        }
    }
}
