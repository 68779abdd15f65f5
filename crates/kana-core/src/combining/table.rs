use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use super::config::{parse_combining_toml, CombiningConfigError};
use crate::unicode::{DAKUTEN, HANDAKUTEN};

pub const DEFAULT_TOML: &str = include_str!("default_combining.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// The two combining voicing marks a base kana can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoicingMark {
    /// U+3099, e.g. か → が
    Dakuten,
    /// U+309A, e.g. は → ぱ
    Handakuten,
}

impl VoicingMark {
    pub const ALL: [VoicingMark; 2] = [VoicingMark::Dakuten, VoicingMark::Handakuten];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            DAKUTEN => Some(Self::Dakuten),
            HANDAKUTEN => Some(Self::Handakuten),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Dakuten => DAKUTEN,
            Self::Handakuten => HANDAKUTEN,
        }
    }

    /// Section name used in the mapping TOML.
    pub fn section(self) -> &'static str {
        match self {
            Self::Dakuten => "dakuten",
            Self::Handakuten => "handakuten",
        }
    }
}

/// One `(base, mark) ↔ precomposed` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombiningEntry {
    pub base: char,
    pub mark: VoicingMark,
    pub precomposed: char,
}

/// Bidirectional lookup between base kana + voicing mark pairs and their
/// precomposed characters.
///
/// Built once from validated TOML and never mutated afterwards, so a shared
/// reference can be handed to any number of threads.
#[derive(Debug)]
pub struct CombiningTable {
    entries: Vec<CombiningEntry>,
    compose: HashMap<(char, VoicingMark), char>,
    decompose: HashMap<char, (char, VoicingMark)>,
}

impl CombiningTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), CombiningConfigError> {
        // Validate eagerly
        parse_combining_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| CombiningConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static CombiningTable {
        static INSTANCE: OnceLock<CombiningTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Self::from_toml(toml_str).expect("combining TOML must be valid")
        })
    }

    /// Build a standalone table, bypassing the global singleton.
    pub fn from_toml(toml_str: &str) -> Result<Self, CombiningConfigError> {
        parse_combining_toml(toml_str).map(Self::from_entries)
    }

    /// Entries are expected to be validated by [`parse_combining_toml`].
    fn from_entries(entries: Vec<CombiningEntry>) -> Self {
        let mut compose = HashMap::with_capacity(entries.len());
        let mut decompose = HashMap::with_capacity(entries.len());
        for e in &entries {
            compose.insert((e.base, e.mark), e.precomposed);
            decompose.insert(e.precomposed, (e.base, e.mark));
        }
        Self {
            entries,
            compose,
            decompose,
        }
    }

    pub fn compose_pair(&self, base: char, mark: VoicingMark) -> Option<char> {
        self.compose.get(&(base, mark)).copied()
    }

    pub fn decompose_char(&self, c: char) -> Option<(char, VoicingMark)> {
        self.decompose.get(&c).copied()
    }

    /// All mappings, sorted by precomposed code point.
    pub fn entries(&self) -> &[CombiningEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
