//! Shared types for D2 trade price analysis
//!
//! Holds the rune unit table used to validate and render prices, plus the
//! error type shared by the tool crates.

pub mod error;
pub mod runes;

pub use error::{Error, Result};
pub use runes::{RuneDef, RuneOrdinal, RuneTable};
