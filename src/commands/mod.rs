pub mod build;

use anyhow::Result;

use crate::cli::{Cli, Commands};

/// Dispatch the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Build(args) => build::run(cli, args),
    }
}
