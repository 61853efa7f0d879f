//! Item catalog built from the unique and set item lists
//!
//! Every catalog line becomes one [`Item`]. Each of its names is normalized
//! and registered in the index, so several keys can resolve to the same item.

use crate::io::lossy_lines;
use d2_common::{Error, Result, RuneOrdinal};
use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;

/// Handle to an item owned by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(usize);

/// A tradeable item and the rune prices observed for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub display_name: String,
    /// Rune ordinal -> number of trades quoting that rune
    pub price_distribution: BTreeMap<RuneOrdinal, u64>,
}

impl Item {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            price_distribution: BTreeMap::new(),
        }
    }

    /// Count one more trade priced at `rune`
    pub fn record_price(&mut self, rune: RuneOrdinal) {
        *self.price_distribution.entry(rune).or_insert(0) += 1;
    }

    pub fn has_prices(&self) -> bool {
        !self.price_distribution.is_empty()
    }
}

/// Reduce a name to its index key: lowercase ASCII letters only.
///
/// Everything else (spaces, digits, punctuation) is removed, so
/// "Harlequin Crest" and "harlequin-crest" both become "harlequincrest".
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Normalized name -> item index over an arena of items
#[derive(Debug, Default)]
pub struct ItemCatalog {
    items: Vec<Item>,
    index: HashMap<String, ItemId>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item reachable under every name in `aliases`.
    ///
    /// Keys already present are overwritten, so the last entry wins.
    /// Returns `None` (and adds nothing) when no alias has any letters.
    pub fn insert<'a, I>(&mut self, display_name: &str, aliases: I) -> Option<ItemId>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keys: Vec<String> = aliases
            .into_iter()
            .map(normalize_name)
            .filter(|key| !key.is_empty())
            .collect();
        if keys.is_empty() {
            return None;
        }

        let id = ItemId(self.items.len());
        self.items.push(Item::new(display_name));
        for key in keys {
            if let Some(previous) = self.index.insert(key.clone(), id) {
                log::trace!(
                    "Alias '{}' now resolves to '{}' instead of '{}'",
                    key,
                    display_name,
                    self.items[previous.0].display_name
                );
            }
        }
        Some(id)
    }

    /// Load the uniques list: one item per line, comma-separated aliases,
    /// the first non-empty alias being the display name.
    ///
    /// Lines without any usable alias are skipped. Returns the number of
    /// items added.
    pub fn load_uniques<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut added = 0;

        for (line_no, line) in lossy_lines(reader).enumerate() {
            let line = line.map_err(|e| Error::read("uniques", e))?;
            let names: Vec<&str> = line
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect();
            let display_name = names.first().copied().unwrap_or_default();

            if self.insert(display_name, names.iter().copied()).is_some() {
                added += 1;
            } else {
                log::warn!("Skipping uniques line {}: no item name", line_no + 1);
            }
        }

        log::debug!("Loaded {added} unique items");
        Ok(added)
    }

    /// Load the sets list: one item name per line, used as its own alias.
    pub fn load_sets<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut added = 0;

        for (line_no, line) in lossy_lines(reader).enumerate() {
            let line = line.map_err(|e| Error::read("sets", e))?;
            let name = line.trim();

            if self.insert(name, [name]).is_some() {
                added += 1;
            } else {
                log::warn!("Skipping sets line {}: no item name", line_no + 1);
            }
        }

        log::debug!("Loaded {added} set items");
        Ok(added)
    }

    /// Resolve an already normalized key
    pub fn lookup(&self, key: &str) -> Option<ItemId> {
        self.index.get(key).copied()
    }

    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.0]
    }

    pub fn item_mut(&mut self, id: ItemId) -> &mut Item {
        &mut self.items[id.0]
    }

    /// Every item exactly once, in load order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Number of items (not aliases)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct index keys
    pub fn alias_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
