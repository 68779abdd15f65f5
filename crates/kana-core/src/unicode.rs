//! Character-level Unicode classification for Japanese text.

/// Combining voiced sound mark (dakuten).
pub const DAKUTEN: char = '\u{3099}';
/// Combining semi-voiced sound mark (handakuten).
pub const HANDAKUTEN: char = '\u{309A}';

/// Check the full Hiragana block (U+3040..U+309F).
///
/// The block also holds the combining voicing marks U+3099 and U+309A, so a
/// mark counts as hiragana here. Use [`is_voicing_mark`] to tell them apart.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Hiragana or katakana, excluding the combining voicing marks.
pub fn is_kana(c: char) -> bool {
    (is_hiragana(c) || is_katakana(c)) && !is_voicing_mark(c)
}

/// Whether `c` is one of the two combining voicing marks.
pub fn is_voicing_mark(c: char) -> bool {
    c == DAKUTEN || c == HANDAKUTEN
}
