//! Price distribution output
//!
//! Report lines look like `Harlequin Crest\tIst:3\tBer:1`: the display name
//! followed by one `rune:count` pair per observed rune.

use crate::catalog::{Item, ItemCatalog};
use d2_common::RuneTable;
use std::io::{self, Write};

/// Format the report line for one item (without the trailing newline)
pub fn format_item_line(item: &Item, runes: &RuneTable) -> String {
    let mut line = item.display_name.clone();
    for (&ordinal, count) in &item.price_distribution {
        match runes.name_of(ordinal) {
            Some(name) => line.push_str(&format!("\t{name}:{count}")),
            None => line.push_str(&format!("\t{ordinal}:{count}")),
        }
    }
    line
}

/// Write one line per item that has at least one observed price.
///
/// Each item is written once no matter how many aliases point at it.
/// Returns the number of lines written.
pub fn write_report<W: Write>(
    writer: &mut W,
    catalog: &ItemCatalog,
    runes: &RuneTable,
) -> io::Result<usize> {
    let mut written = 0;
    for item in catalog.items().filter(|item| item.has_prices()) {
        writeln!(writer, "{}", format_item_line(item, runes))?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Console summary of all priced items
pub fn format_summary(catalog: &ItemCatalog, runes: &RuneTable) -> String {
    let mut output = String::new();

    output.push_str("ITEM PRICES\n");
    output.push_str("===========\n\n");

    let mut priced = 0;
    for item in catalog.items().filter(|item| item.has_prices()) {
        output.push_str(&format_item_line(item, runes));
        output.push('\n');
        priced += 1;
    }

    if priced == 0 {
        output.push_str("No prices found.\n");
    }

    output
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
