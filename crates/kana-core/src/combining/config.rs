use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::table::{CombiningEntry, VoicingMark};
use crate::unicode::is_kana;

#[derive(Deserialize)]
struct CombiningConfig {
    #[serde(default)]
    dakuten: BTreeMap<String, String>,
    #[serde(default)]
    handakuten: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CombiningConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[dakuten] and [handakuten] tables are both empty")]
    Empty,
    #[error("[{section}] expected a single character, got {value:?}")]
    NotSingleChar { section: &'static str, value: String },
    #[error("[{section}] not a kana character: {value:?}")]
    NotKana { section: &'static str, value: char },
    #[error("{0:?} is the precomposed form of more than one pair")]
    DuplicatePrecomposed(char),
    #[error("{0:?} is both a precomposed form and a base")]
    ChainedMapping(char),
    #[error("combining table already initialized")]
    AlreadyInitialized,
}

/// Parse mapping TOML into entries sorted by precomposed code point.
///
/// The result is guaranteed to be a bijection in which no precomposed
/// character is itself a base.
pub fn parse_combining_toml(toml_str: &str) -> Result<Vec<CombiningEntry>, CombiningConfigError> {
    let config: CombiningConfig =
        toml::from_str(toml_str).map_err(|e| CombiningConfigError::Parse(e.to_string()))?;

    if config.dakuten.is_empty() && config.handakuten.is_empty() {
        return Err(CombiningConfigError::Empty);
    }

    let mut entries = Vec::with_capacity(config.dakuten.len() + config.handakuten.len());
    for (mark, section) in [
        (VoicingMark::Dakuten, &config.dakuten),
        (VoicingMark::Handakuten, &config.handakuten),
    ] {
        for (base, precomposed) in section {
            entries.push(CombiningEntry {
                base: kana_char(mark, base)?,
                mark,
                precomposed: kana_char(mark, precomposed)?,
            });
        }
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for e in &entries {
        if !seen.insert(e.precomposed) {
            return Err(CombiningConfigError::DuplicatePrecomposed(e.precomposed));
        }
    }
    if let Some(e) = entries.iter().find(|e| seen.contains(&e.base)) {
        return Err(CombiningConfigError::ChainedMapping(e.base));
    }

    entries.sort_by_key(|e| e.precomposed);
    Ok(entries)
}

fn kana_char(mark: VoicingMark, s: &str) -> Result<char, CombiningConfigError> {
    let mut chars = s.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(CombiningConfigError::NotSingleChar {
            section: mark.section(),
            value: s.to_string(),
        });
    };
    if !is_kana(c) {
        return Err(CombiningConfigError::NotKana {
            section: mark.section(),
            value: c,
        });
    }
    Ok(c)
}
