use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, normalize_ops};
use kana_cli::trace_init::init_tracing;
use kana_core::Direction;

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana combining-mark normalization tool")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom mapping table TOML (see `table-export`)
    #[arg(long, global = true)]
    table: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize TEXT arguments, or stdin line by line when none are given
    Normalize {
        /// compose or decompose (default: settings combining.direction)
        #[arg(short, long)]
        direction: Option<Direction>,
        texts: Vec<String>,
    },
    /// List the active mapping table
    Table {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default mapping table TOML
    TableExport,
    /// Validate a mapping table TOML file
    TableValidate { file: String },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    normalize_ops::load_overrides(cli.settings.as_deref(), cli.table.as_deref());

    match cli.command {
        Command::Normalize { direction, texts } => normalize_ops::normalize(&texts, direction),
        Command::Table { json } => normalize_ops::table(json),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_normalize_direction() {
        let cli = Cli::try_parse_from(["kanatool", "normalize", "-d", "decompose", "が", "ぱ"])
            .unwrap();
        match cli.command {
            Command::Normalize { direction, texts } => {
                assert_eq!(direction, Some(Direction::Decompose));
                assert_eq!(texts, vec!["が", "ぱ"]);
            }
            _ => panic!("expected normalize"),
        }
    }

    #[test]
    fn parse_normalize_defaults() {
        let cli = Cli::try_parse_from(["kanatool", "normalize"]).unwrap();
        assert!(cli.settings.is_none());
        match cli.command {
            Command::Normalize { direction, texts } => {
                assert_eq!(direction, None);
                assert!(texts.is_empty());
            }
            _ => panic!("expected normalize"),
        }
    }

    #[test]
    fn parse_global_overrides() {
        let cli = Cli::try_parse_from(["kanatool", "table", "--json", "--table", "t.toml"])
            .unwrap();
        assert_eq!(cli.table.as_deref(), Some("t.toml"));
        assert!(matches!(cli.command, Command::Table { json: true }));
    }

    #[test]
    fn reject_unknown_direction() {
        assert!(Cli::try_parse_from(["kanatool", "normalize", "-d", "sideways"]).is_err());
    }
}
