use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `campus` binary.
#[derive(Debug, Parser)]
#[command(
    name = "campus",
    version,
    about = "Campus - academic records administration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (default from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags, falling back to config defaults
    /// for anything not given on the command line.
    #[must_use]
    pub fn global_flags(&self, config: Option<&campus_config::CampusConfig>) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            config
                .and_then(|c| OutputFormat::from_name(&c.general.default_format))
                .unwrap_or(OutputFormat::Table)
        });
        let default_limit = config.map_or(20, |c| c.general.default_limit);

        GlobalFlags {
            format,
            limit: self.limit,
            default_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::StudentCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "campus", "--format", "json", "--limit", "10", "--verbose", "summary",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Summary));
    }

    #[test]
    fn format_falls_back_to_table_without_config() {
        let cli = Cli::try_parse_from(["campus", "ping"]).expect("cli should parse");
        let flags = cli.global_flags(None);
        assert_eq!(flags.format, OutputFormat::Table);
        assert_eq!(flags.default_limit, 20);
    }

    #[test]
    fn student_list_accepts_search_and_sort() {
        let cli = Cli::try_parse_from([
            "campus", "student", "list", "--search", "ann", "--sort", "name",
        ])
        .expect("cli should parse");

        let Commands::Student { action } = cli.command else {
            panic!("expected student subcommand");
        };
        let StudentCommands::List { search, sort, .. } = action else {
            panic!("expected list action");
        };
        assert_eq!(search.as_deref(), Some("ann"));
        assert_eq!(sort.as_deref(), Some("name"));
    }
}
