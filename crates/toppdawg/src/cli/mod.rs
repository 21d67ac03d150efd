//! Command-line interface for toppdawg.
//!
//! This module provides the CLI structure and command handlers for the
//! `tdawg` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, FeedCommand, StatusCommand, ThemeAction, ThemeCommand,
};

/// tdawg - The ToppDawg subscriber dashboard
///
/// Add your dogs, get their daily raw-food recommendation, rack up loyalty
/// points, and keep the dashboard looking the way you like it.
#[derive(Debug, Parser)]
#[command(name = "tdawg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run an interactive dashboard session
    Session,

    /// Add a single dog profile and show its recommendation
    Add(AddCommand),

    /// Compute a feeding recommendation without adding a profile
    Feed(FeedCommand),

    /// Toggle or show the dashboard theme
    Theme(ThemeCommand),

    /// Show the dashboard overview
    Status(StatusCommand),

    /// View or modify configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "tdawg");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Session,
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: false,
            command: Command::Session,
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        let cli = Cli {
            config: None,
            verbose: 1,
            quiet: false,
            command: Command::Session,
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_trace() {
        let cli = Cli {
            config: None,
            verbose: 3,
            quiet: false,
            command: Command::Session,
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_session() {
        let args = vec!["tdawg", "session"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Session));
    }

    #[test]
    fn test_parse_add() {
        let args = vec![
            "tdawg", "add", "--name", "Rex", "--breed", "Labrador", "--age", "3", "--weight", "40",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        let Command::Add(cmd) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(cmd.name, "Rex");
        assert!((cmd.weight - 40.0).abs() < f64::EPSILON);
        assert_eq!(cmd.dietary_needs, "");
    }

    #[test]
    fn test_parse_add_requires_age_and_weight() {
        let args = vec!["tdawg", "add", "--name", "Rex"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_feed() {
        let args = vec!["tdawg", "feed", "--weight", "10", "--age", "0.5", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();

        let Command::Feed(cmd) = cli.command else {
            panic!("expected feed command");
        };
        assert!((cmd.age - 0.5).abs() < f64::EPSILON);
        assert!(cmd.json);
    }

    #[test]
    fn test_parse_theme_defaults_to_toggle() {
        let args = vec!["tdawg", "theme"];
        let cli = Cli::try_parse_from(args).unwrap();

        let Command::Theme(cmd) = cli.command else {
            panic!("expected theme command");
        };
        assert_eq!(cmd.action, None);
    }

    #[test]
    fn test_parse_theme_show() {
        let args = vec!["tdawg", "theme", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        let Command::Theme(cmd) = cli.command else {
            panic!("expected theme command");
        };
        assert_eq!(cmd.action, Some(ThemeAction::Show));
    }

    #[test]
    fn test_parse_status_json() {
        let args = vec!["tdawg", "status", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();

        let Command::Status(cmd) = cli.command else {
            panic!("expected status command");
        };
        assert!(cmd.json);
    }

    #[test]
    fn test_parse_config_path() {
        let args = vec!["tdawg", "config", "path"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["tdawg", "-c", "/custom/config.toml", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let args = vec!["tdawg", "-v", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_with_quiet() {
        let args = vec!["tdawg", "-q", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.quiet);
    }
}
