//! CLI entry point for greedy string-art pattern generation

use clap::Parser;
use greedythread::io::cli::{Cli, FileProcessor};
use greedythread::io::logging::init_logging;

fn main() -> greedythread::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
