//! CLI entry point for the bingo card sheet generator

use bingotiles::io::cli::{Cli, Pipeline};
use clap::Parser;

fn main() -> bingotiles::Result<()> {
    let cli = Cli::parse();
    let mut pipeline = Pipeline::new(cli);
    pipeline.run()
}
