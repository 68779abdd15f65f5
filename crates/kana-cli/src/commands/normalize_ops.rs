use std::fs;
use std::io::{self, BufRead, BufWriter, Write};

use serde::Serialize;
use tracing::debug;

use kana_core::combining::{self, CombiningEntry, CombiningTable, Direction};
use kana_core::settings;

/// Install custom settings / mapping table before anything reads the globals.
pub fn load_overrides(settings_file: Option<&str>, table_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = table_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(CombiningTable::init_custom(content), "Error in {file}: {}");
    }
}

pub fn normalize(texts: &[String], direction: Option<Direction>) {
    let direction = direction.unwrap_or_else(|| settings::settings().combining.direction());
    debug!(%direction, args = texts.len(), "normalize");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if texts.is_empty() {
        let stdin = io::stdin();
        die!(
            normalize_lines(stdin.lock(), &mut out, direction),
            "Error: {}"
        );
    } else {
        for text in texts {
            die!(
                writeln!(out, "{}", combining::process(text, direction)),
                "Error: {}"
            );
        }
    }
    die!(out.flush(), "Error: {}");
}

/// Normalize each input line, returning the number of lines written.
///
/// Line terminators (`\n` or `\r\n`) are written back as read, and a final
/// line without one stays without one.
pub fn normalize_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    direction: Direction,
) -> io::Result<usize> {
    let mut count = 0;
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        writer.write_all(combining::process(&line, direction).as_bytes())?;
        line.clear();
        count += 1;
    }
    Ok(count)
}

#[derive(Serialize)]
struct TableDump<'a> {
    len: usize,
    entries: &'a [CombiningEntry],
}

pub fn table(json: bool) {
    let table = CombiningTable::global();
    if json {
        let dump = TableDump {
            len: table.len(),
            entries: table.entries(),
        };
        let s = die!(serde_json::to_string_pretty(&dump), "Error: {}");
        println!("{s}");
        return;
    }
    for e in table.entries() {
        println!("{}", format_entry(e));
    }
    println!("{} mappings", table.len());
}

fn format_entry(e: &CombiningEntry) -> String {
    format!(
        "U+{:04X} + U+{:04X} -> U+{:04X}  {} ({})",
        e.base as u32,
        e.mark.as_char() as u32,
        e.precomposed as u32,
        e.precomposed,
        e.mark.section(),
    )
}
