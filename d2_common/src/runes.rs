//! Rune unit table
//!
//! Prices in trade chat are quoted as a single rune. The table maps the
//! lowercase rune name to its ladder ordinal and back to the display name.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Position of a rune on the ladder (El = 1 ... Zod = 33)
pub type RuneOrdinal = u8;

/// Built-in rune ladder, lowest to highest
const LADDER: [&str; 33] = [
    "El", "Eld", "Tir", "Nef", "Eth", "Ith", "Tal", "Ral", "Ort", "Thul", "Amn", "Sol", "Shael",
    "Dol", "Hel", "Io", "Lum", "Ko", "Fal", "Lem", "Pul", "Um", "Mal", "Ist", "Gul", "Vex", "Ohm",
    "Lo", "Sur", "Ber", "Jah", "Cham", "Zod",
];

/// A single rune entry as it appears in a rune table file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RuneDef {
    pub ordinal: RuneOrdinal,
    pub name: String,
}

/// Immutable name <-> ordinal lookup over a closed set of runes
#[derive(Debug, Clone)]
pub struct RuneTable {
    by_name: HashMap<String, RuneOrdinal>,
    by_ordinal: HashMap<RuneOrdinal, String>,
}

impl RuneTable {
    /// Build a table from explicit entries.
    ///
    /// Names must be non-empty and alphabetic, since trade lines are reduced
    /// to letter-only tokens before the price lookup. Duplicate names
    /// (case-insensitive) or ordinals are rejected.
    pub fn from_defs<I>(defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = RuneDef>,
    {
        let mut by_name = HashMap::new();
        let mut by_ordinal = HashMap::new();

        for def in defs {
            let name = def.name.trim();
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(Error::RuneTable(format!(
                    "rune name '{}' must be non-empty and contain only letters",
                    def.name
                )));
            }

            let key = name.to_ascii_lowercase();
            if by_name.insert(key, def.ordinal).is_some() {
                return Err(Error::RuneTable(format!("duplicate rune name '{name}'")));
            }
            if by_ordinal.insert(def.ordinal, name.to_string()).is_some() {
                return Err(Error::RuneTable(format!(
                    "duplicate rune ordinal {}",
                    def.ordinal
                )));
            }
        }

        if by_name.is_empty() {
            return Err(Error::RuneTable("no runes defined".to_string()));
        }

        Ok(Self {
            by_name,
            by_ordinal,
        })
    }

    /// Load a table from a JSON array of `{"ordinal": n, "name": "..."}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defs: Vec<RuneDef> = serde_json::from_str(json)?;
        Self::from_defs(defs)
    }

    /// Load a table from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let table = Self::from_json_str(&json)?;
        log::info!("Loaded {} runes from {}", table.len(), path.display());
        Ok(table)
    }

    /// Look up the ordinal of a rune by name (case-insensitive)
    pub fn ordinal_of(&self, name: &str) -> Option<RuneOrdinal> {
        if let Some(&ordinal) = self.by_name.get(name) {
            return Some(ordinal);
        }
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    /// Display name for an ordinal (e.g. 24 -> "Ist")
    pub fn name_of(&self, ordinal: RuneOrdinal) -> Option<&str> {
        self.by_ordinal.get(&ordinal).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for RuneTable {
    /// The standard 33-rune ladder
    fn default() -> Self {
        let by_name: HashMap<String, RuneOrdinal> = LADDER
            .iter()
            .zip(1..)
            .map(|(name, ordinal)| (name.to_ascii_lowercase(), ordinal))
            .collect();
        let by_ordinal: HashMap<RuneOrdinal, String> = LADDER
            .iter()
            .zip(1..)
            .map(|(name, ordinal)| (ordinal, (*name).to_string()))
            .collect();

        Self {
            by_name,
            by_ordinal,
        }
    }
}

#[cfg(test)]
#[path = "runes_tests.rs"]
mod tests;
