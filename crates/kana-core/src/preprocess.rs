//! Seam between text transforms and the lookup pipeline that runs them.
//!
//! A pipeline stage does not call transforms directly. It enumerates each
//! preprocessor's [`options`](TextPreprocessor::options), runs the text
//! through every option and looks up each distinct result.

use crate::combining::{self, Direction};

pub trait TextPreprocessor {
    type Setting: Copy + 'static;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Settings the pipeline should try, in order.
    fn options(&self) -> &'static [Self::Setting];

    fn process(&self, text: &str, setting: Self::Setting) -> String;
}

/// Composes combining voicing marks. A `None` setting leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombiningNormalizer;

impl TextPreprocessor for CombiningNormalizer {
    type Setting = Option<Direction>;

    fn name(&self) -> &'static str {
        "normalize_combining_characters"
    }

    fn description(&self) -> &'static str {
        "か\u{3099} → が, は\u{309A} → ぱ"
    }

    fn options(&self) -> &'static [Option<Direction>] {
        &[None, Some(Direction::Compose)]
    }

    fn process(&self, text: &str, setting: Option<Direction>) -> String {
        match setting {
            Some(direction) => combining::process(text, direction),
            None => text.to_string(),
        }
    }
}

/// Distinct outputs of `preprocessor` over all of its options, first
/// occurrence order.
pub fn variants<P: TextPreprocessor>(preprocessor: &P, text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(preprocessor.options().len());
    for &setting in preprocessor.options() {
        let processed = preprocessor.process(text, setting);
        if !out.contains(&processed) {
            out.push(processed);
        }
    }
    out
}
