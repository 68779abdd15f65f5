//! Combining voicing-mark normalization.
//!
//! Rewrites a base kana followed by a standalone combining dakuten (U+3099)
//! or handakuten (U+309A) into its precomposed form (か + U+3099 → が), and
//! back. Anything the mapping table does not cover passes through untouched,
//! so the transform is total over arbitrary text.

mod config;
mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

pub use config::{parse_combining_toml, CombiningConfigError};
pub use table::{CombiningEntry, CombiningTable, VoicingMark, DEFAULT_TOML};

/// Which way [`process`] rewrites text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// base + mark → precomposed
    Compose,
    /// precomposed → base + mark
    Decompose,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compose => "compose",
            Self::Decompose => "decompose",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown direction {0:?} (expected \"compose\" or \"decompose\")")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compose" => Ok(Self::Compose),
            "decompose" => Ok(Self::Decompose),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Normalize `text` in `direction` using the global table.
pub fn process(text: &str, direction: Direction) -> String {
    process_with(CombiningTable::global(), text, direction)
}

pub fn process_with(table: &CombiningTable, text: &str, direction: Direction) -> String {
    let _span = debug_span!("normalize_combining", %direction, len = text.len()).entered();
    match direction {
        Direction::Compose => compose_with(table, text),
        Direction::Decompose => decompose_with(table, text),
    }
}

pub fn compose(text: &str) -> String {
    compose_with(CombiningTable::global(), text)
}

/// Single greedy left-to-right pass.
///
/// A character followed by a voicing mark is replaced together with the mark
/// when the pair is in `table`; every other character, including a mark with
/// no eligible base before it, is copied as is.
pub fn compose_with(table: &CombiningTable, text: &str) -> String {
    if !needs_compose_with(table, text) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut composed = 0usize;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let precomposed = chars
            .peek()
            .and_then(|&next| VoicingMark::from_char(next))
            .and_then(|mark| table.compose_pair(c, mark));
        match precomposed {
            Some(p) => {
                out.push(p);
                chars.next();
                composed += 1;
            }
            None => out.push(c),
        }
    }
    debug!(composed, "composed voicing marks");
    out
}

pub fn decompose(text: &str) -> String {
    decompose_with(CombiningTable::global(), text)
}

/// Per-character rewrite of every precomposed character into base + mark.
pub fn decompose_with(table: &CombiningTable, text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut decomposed = 0usize;
    for c in text.chars() {
        match table.decompose_char(c) {
            Some((base, mark)) => {
                out.push(base);
                out.push(mark.as_char());
                decomposed += 1;
            }
            None => out.push(c),
        }
    }
    debug!(decomposed, "decomposed voicing marks");
    out
}

/// Whether [`compose`] would change `text`.
pub fn needs_compose(text: &str) -> bool {
    needs_compose_with(CombiningTable::global(), text)
}

pub fn needs_compose_with(table: &CombiningTable, text: &str) -> bool {
    text.chars().zip(text.chars().skip(1)).any(|(c, next)| {
        VoicingMark::from_char(next).is_some_and(|mark| table.compose_pair(c, mark).is_some())
    })
}
