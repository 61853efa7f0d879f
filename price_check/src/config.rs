//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;

/// Builds rune price distributions for D2 items from trade listings
#[derive(Parser, Debug)]
#[command(name = "price_check")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input file containing trade listings
    #[arg(long = "in", default_value = "input.txt")]
    pub input: PathBuf,

    /// Output file which will contain all items and their price distributions
    #[arg(long = "out", default_value = "output.txt")]
    pub output: PathBuf,

    /// File containing unique item names (comma-separated aliases per line)
    #[arg(long, default_value = "data/uniques.txt")]
    pub uniques: PathBuf,

    /// File containing set item names (one per line)
    #[arg(long, default_value = "data/sets.txt")]
    pub sets: PathBuf,

    /// JSON rune table replacing the built-in rune ladder
    #[arg(long)]
    pub runes: Option<PathBuf>,

    /// Do not print the price summary to stdout
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
