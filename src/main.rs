//! CLI entry point for the recursive backtracker maze generator

use clap::Parser;
use mazecarve::io::cli::{Cli, GenerationRunner};

fn main() -> mazecarve::Result<()> {
    let cli = Cli::parse();
    let mut runner = GenerationRunner::new(cli);
    runner.run()
}
