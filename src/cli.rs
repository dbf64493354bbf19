use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::{DEFAULT_CELL_SIZE_KM, DEFAULT_OUTLINE_ALPHA_MULTIPLIER};

/// Hex-grid map overlay CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "hexmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Composite a GeoJSON collection of areas into a hex-grid overlay
    Build(BuildArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input GeoJSON FeatureCollection of areas (and optional pins)
    #[arg(value_hint = ValueHint::FilePath)]
    pub areas: PathBuf,

    /// Output GeoJSON file for the composited cells
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Hex side length in kilometres (floored at 0.2)
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE_KM)]
    pub cell_size: f64,

    /// Outline alpha as a multiple of fill opacity
    #[arg(long, default_value_t = DEFAULT_OUTLINE_ALPHA_MULTIPLIER)]
    pub outline_multiplier: f64,

    /// Seed the jitter noise for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}
