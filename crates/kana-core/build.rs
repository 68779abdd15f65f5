const SETTINGS: &str = "src/default_settings.toml";
const COMBINING: &str = "src/combining/default_combining.toml";

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS}");
    println!("cargo:rerun-if-changed={COMBINING}");

    parse(SETTINGS, include_str!("src/default_settings.toml"));

    // Full validation (kana-only, bijection) runs in `parse_combining_toml`;
    // here only the shape is checked so a broken table fails the build.
    let table = parse(COMBINING, include_str!("src/combining/default_combining.toml"));
    for section in ["dakuten", "handakuten"] {
        let Some(entries) = table.get(section).and_then(|v| v.as_table()) else {
            panic!("{COMBINING} is missing the [{section}] table");
        };
        for (base, value) in entries {
            let ok = base.chars().count() == 1
                && value.as_str().is_some_and(|s| s.chars().count() == 1);
            if !ok {
                panic!("{COMBINING} [{section}] {base:?} must map one char to one char");
            }
        }
    }
}

fn parse(path: &str, content: &str) -> toml::Table {
    content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}
