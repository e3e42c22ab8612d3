//! CLI entry point for the minimal squared-square dissection search

use clap::Parser;
use minsquares::io::cli::{Cli, Runner};

fn main() -> minsquares::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    runner.run()
}
