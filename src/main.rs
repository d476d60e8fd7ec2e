//! CLI entry point for the hue/brightness collage builder

use clap::Parser;
use huesort::io::cli::{Cli, FileProcessor};

fn main() -> huesort::Result<()> {
    let cli = Cli::parse();
    let processor = FileProcessor::new(cli);
    processor.process().map(|_report| ())
}
