//! One end-to-end run: load catalogs, scan trades, write the report

use crate::analyzer::{AnalysisSummary, LogObserver, PriceAnalyzer};
use crate::catalog::ItemCatalog;
use crate::config::Args;
use crate::io::{create_writer, open_reader};
use crate::matcher::MatcherConfig;
use crate::report::write_report;
use d2_common::{Error, Result, RuneTable};

/// Everything a finished run produced
pub struct RunOutcome {
    pub analyzer: PriceAnalyzer,
    pub summary: AnalysisSummary,
    /// Number of item lines written to the report
    pub written: usize,
}

/// Run the analysis described by `args`.
///
/// All inputs and the output are opened before any work starts, so a missing
/// file fails fast without leaving a half-written report.
pub fn run(args: &Args) -> Result<RunOutcome> {
    let runes = match &args.runes {
        Some(path) => RuneTable::from_json_file(path)?,
        None => RuneTable::default(),
    };

    let trades = open_reader(&args.input)?;
    let uniques = open_reader(&args.uniques)?;
    let sets = open_reader(&args.sets)?;
    let mut output = create_writer(&args.output)?;

    let mut catalog = ItemCatalog::new();
    let unique_count = catalog
        .load_uniques(uniques)
        .map_err(|e| e.with_path(&args.uniques))?;
    let set_count = catalog
        .load_sets(sets)
        .map_err(|e| e.with_path(&args.sets))?;
    log::info!(
        "Loaded {} items ({} uniques, {} sets) under {} names",
        catalog.len(),
        unique_count,
        set_count,
        catalog.alias_count()
    );
    let mut analyzer = PriceAnalyzer::new(catalog, runes, MatcherConfig::default());

    log::info!("Scanning trades from {}", args.input.display());
    let summary = analyzer
        .analyze(trades, &mut LogObserver)
        .map_err(|e| e.with_path(&args.input))?;
    log::info!(
        "Scanned {} lines: {} matched, {} skipped",
        summary.lines,
        summary.matched,
        summary.rejected
    );

    let written = write_report(&mut output, analyzer.catalog(), analyzer.runes())
        .map_err(|e| Error::io(&args.output, e))?;
    log::info!("Wrote {} items to {}", written, args.output.display());

    Ok(RunOutcome {
        analyzer,
        summary,
        written,
    })
}
