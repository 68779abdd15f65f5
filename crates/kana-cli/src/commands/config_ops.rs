use std::fs;

use kana_core::combining::{parse_combining_toml, VoicingMark, DEFAULT_TOML};

pub fn table_export() {
    print!("{DEFAULT_TOML}");
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let entries = die!(parse_combining_toml(&content), "Error: {}");
    let dakuten = entries
        .iter()
        .filter(|e| e.mark == VoicingMark::Dakuten)
        .count();
    println!(
        "OK: {} mappings (dakuten={}, handakuten={})",
        entries.len(),
        dakuten,
        entries.len() - dakuten
    );
}

pub fn settings_export() {
    print!("{}", kana_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kana_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!("OK: combining.direction={}", s.combining.direction());
}
