//! Price Check - D2 trade listing price analysis
//!
//! Reads trade listings, matches them to unique and set items and writes the
//! rune price distribution of every traded item.

use clap::Parser;
use price_check::config::Args;
use price_check::format_summary;

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=price_check=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting price_check...");

    let outcome = match price_check::run(&args) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Price check failed: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if !args.quiet {
        let analyzer = &outcome.analyzer;
        println!("\n{}", format_summary(analyzer.catalog(), analyzer.runes()));
    }
}
