//! Trade scanning
//!
//! Feeds every trade line through the matcher and counts the rune price of
//! each match on the matched item.

use crate::catalog::{Item, ItemCatalog};
use crate::io::lossy_lines;
use crate::matcher::{MatcherConfig, Rejection, TradeMatcher};
use d2_common::{Error, Result, RuneTable};
use std::io::BufRead;

/// Diagnostic hooks called while scanning trades.
///
/// Observers only watch; they cannot change what gets counted.
pub trait TradeObserver {
    fn on_line(&mut self, _line_no: usize, _line: &str) {}
    fn on_match(&mut self, _line_no: usize, _item: &Item, _rune: &str) {}
    fn on_reject(&mut self, _line_no: usize, _line: &str, _reason: &Rejection) {}
}

/// Observer that ignores everything
pub struct NullObserver;

impl TradeObserver for NullObserver {}

/// Observer that traces each line through the `log` crate
pub struct LogObserver;

impl TradeObserver for LogObserver {
    fn on_line(&mut self, line_no: usize, line: &str) {
        log::trace!("Processing line {}: \"{}\"", line_no, line);
    }

    fn on_match(&mut self, line_no: usize, item: &Item, rune: &str) {
        log::debug!(
            "Line {}: matched item \"{}\" with price {}",
            line_no,
            item.display_name,
            rune
        );
    }

    fn on_reject(&mut self, line_no: usize, line: &str, reason: &Rejection) {
        log::trace!("Line {} skipped ({}): \"{}\"", line_no, reason, line);
    }
}

/// Counts from one scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub lines: usize,
    pub matched: usize,
    pub rejected: usize,
}

/// Holds the catalog and rune table for a run and accumulates prices
pub struct PriceAnalyzer {
    catalog: ItemCatalog,
    runes: RuneTable,
    config: MatcherConfig,
}

impl PriceAnalyzer {
    pub fn new(catalog: ItemCatalog, runes: RuneTable, config: MatcherConfig) -> Self {
        Self {
            catalog,
            runes,
            config,
        }
    }

    /// Build the catalog from the uniques list, then the sets list.
    ///
    /// Sets are loaded second, so a set name overrides a unique alias that
    /// normalizes to the same key.
    pub fn load<U: BufRead, S: BufRead>(
        uniques: U,
        sets: S,
        runes: RuneTable,
        config: MatcherConfig,
    ) -> Result<Self> {
        let mut catalog = ItemCatalog::new();
        let unique_count = catalog.load_uniques(uniques)?;
        let set_count = catalog.load_sets(sets)?;
        log::info!(
            "Loaded {} items ({} uniques, {} sets) under {} names",
            catalog.len(),
            unique_count,
            set_count,
            catalog.alias_count()
        );

        Ok(Self::new(catalog, runes, config))
    }

    /// Scan all trade lines, recording the price of every match.
    ///
    /// Lines that do not match are skipped, including lines that are not
    /// valid UTF-8 text. Only a read failure aborts.
    pub fn analyze<R, O>(&mut self, trades: R, observer: &mut O) -> Result<AnalysisSummary>
    where
        R: BufRead,
        O: TradeObserver + ?Sized,
    {
        let mut summary = AnalysisSummary::default();

        for (index, line) in lossy_lines(trades).enumerate() {
            let line = line.map_err(|e| Error::read("trades", e))?;
            let line_no = index + 1;
            summary.lines += 1;
            observer.on_line(line_no, &line);

            let outcome =
                TradeMatcher::new(&self.catalog, &self.runes, &self.config).match_line(&line);
            match outcome {
                Ok(trade) => {
                    let item = self.catalog.item_mut(trade.item);
                    item.record_price(trade.rune);
                    summary.matched += 1;

                    let rune = self.runes.name_of(trade.rune).unwrap_or("?");
                    observer.on_match(line_no, item, rune);
                }
                Err(reason) => {
                    summary.rejected += 1;
                    observer.on_reject(line_no, &line, &reason);
                }
            }
        }

        Ok(summary)
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn runes(&self) -> &RuneTable {
        &self.runes
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
