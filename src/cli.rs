//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect and check the blog site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path
    #[arg(short = 'C', long, default_value = "site.toml", global = true)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for `show`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the config file
    Check,

    /// Print the config (the built-in one if the file does not exist)
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },

    /// Print the navigation menu in display order
    Nav,
}

#[allow(unused)]
impl Cli {
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_default_config() {
        let cli = Cli::try_parse_from(["blog-config", "check"]).unwrap();
        assert!(cli.is_check());
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_parse_show_json_with_config() {
        let cli =
            Cli::try_parse_from(["blog-config", "show", "--format", "json", "-C", "blog.toml"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: Format::Json
            }
        ));
        assert_eq!(cli.config, PathBuf::from("blog.toml"));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["blog-config", "show", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
