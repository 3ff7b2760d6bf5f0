//! CLI entry point for randomized Kruskal maze generation

use clap::Parser;
use mazecarve::io::cli::{Cli, LevelRunner};
use mazecarve::io::logging::init_logging;

fn main() -> mazecarve::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let mut runner = LevelRunner::new(cli);
    runner.run()
}
