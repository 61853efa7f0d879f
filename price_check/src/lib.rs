//! Price Check - D2 trade listing price analysis
//!
//! Matches free-text trade lines to unique and set items and counts the rune
//! each item was priced at.

pub mod analyzer;
pub mod app;
pub mod catalog;
pub mod config;
pub mod io;
pub mod matcher;
pub mod report;

pub use analyzer::{AnalysisSummary, LogObserver, NullObserver, PriceAnalyzer, TradeObserver};
pub use app::{run, RunOutcome};
pub use catalog::{normalize_name, Item, ItemCatalog, ItemId};
pub use d2_common::{Error, Result, RuneTable};
pub use matcher::{tokenize, MatcherConfig, Rejection, TradeMatch, TradeMatcher};
pub use report::{format_summary, write_report};
