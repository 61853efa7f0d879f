//! Trade line matching
//!
//! Turns one line of trade chat ("offer harlequin crest need ist") into the
//! catalog item being traded and the rune it is priced at.

use crate::catalog::{ItemCatalog, ItemId};
use d2_common::{RuneOrdinal, RuneTable};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref NON_ALPHA: Regex = Regex::new("[^a-z]+").unwrap();
}

/// Words stripped from the ends of a trade line before matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Offer/request markers dropped when they are the first token
    pub leading_markers: Vec<String>,
    /// Markers dropped when they are the last token ("obo")
    pub trailing_markers: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            leading_markers: ["o", "offer", "n", "need", "wts"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            trailing_markers: vec!["obo".to_string()],
        }
    }
}

impl MatcherConfig {
    fn is_leading_marker(&self, token: &str) -> bool {
        self.leading_markers
            .iter()
            .any(|m| m.eq_ignore_ascii_case(token))
    }

    fn is_trailing_marker(&self, token: &str) -> bool {
        self.trailing_markers
            .iter()
            .any(|m| m.eq_ignore_ascii_case(token))
    }
}

/// A trade line resolved to an item and a price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeMatch {
    pub item: ItemId,
    pub rune: RuneOrdinal,
}

/// Why a line did not produce a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer than two words left (need at least an item and a price)
    TooFewTokens,
    /// The last word is not a rune name
    UnknownPrice(String),
    /// No prefix of the remaining words names a catalog item
    UnknownItem,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooFewTokens => write!(f, "not enough words for an item and a price"),
            Rejection::UnknownPrice(token) => write!(f, "'{}' is not a rune", token),
            Rejection::UnknownItem => write!(f, "no known item name"),
        }
    }
}

/// Split a trade line into lowercase letter-only words
pub fn tokenize(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase();
    NON_ALPHA
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Matches trade lines against a catalog and a rune table
pub struct TradeMatcher<'a> {
    catalog: &'a ItemCatalog,
    runes: &'a RuneTable,
    config: &'a MatcherConfig,
}

impl<'a> TradeMatcher<'a> {
    pub fn new(catalog: &'a ItemCatalog, runes: &'a RuneTable, config: &'a MatcherConfig) -> Self {
        Self {
            catalog,
            runes,
            config,
        }
    }

    /// Parse one line of trade text.
    ///
    /// The last word must be a rune. The item name is the longest run of
    /// leading words that, joined without spaces, is a catalog key.
    pub fn match_line(&self, line: &str) -> Result<TradeMatch, Rejection> {
        let tokens = tokenize(line);
        let mut words: &[String] = &tokens;

        if words.len() < 2 {
            return Err(Rejection::TooFewTokens);
        }

        // Only a single marker is stripped at each end
        if self.config.is_leading_marker(&words[0]) {
            words = &words[1..];
            if words.len() < 2 {
                return Err(Rejection::TooFewTokens);
            }
        }
        if self.config.is_trailing_marker(&words[words.len() - 1]) {
            words = &words[..words.len() - 1];
            if words.len() < 2 {
                return Err(Rejection::TooFewTokens);
            }
        }

        let (price, name_words) = match words.split_last() {
            Some(split) => split,
            None => return Err(Rejection::TooFewTokens),
        };
        let rune = self
            .runes
            .ordinal_of(price)
            .ok_or_else(|| Rejection::UnknownPrice(price.clone()))?;

        let item = self
            .find_item(name_words)
            .ok_or(Rejection::UnknownItem)?;

        Ok(TradeMatch { item, rune })
    }

    /// Longest-prefix lookup: all words first, then drop words from the end
    fn find_item(&self, words: &[String]) -> Option<ItemId> {
        (1..=words.len())
            .rev()
            .find_map(|len| self.catalog.lookup(&words[..len].concat()))
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
