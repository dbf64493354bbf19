use anyhow::Result;
use clap::Parser;

use hexmap::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    hexmap::commands::run(&cli)
}
