//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// The dog's name
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// The dog's breed
    #[arg(short, long, default_value = "")]
    pub breed: String,

    /// The dog's age in years
    #[arg(short, long)]
    pub age: f64,

    /// The dog's body weight in pounds
    #[arg(short, long)]
    pub weight: f64,

    /// Free-form dietary needs
    #[arg(short, long, default_value = "")]
    pub dietary_needs: String,
}

impl AddCommand {
    /// Convert the parsed arguments into a profile draft.
    #[must_use]
    pub fn into_draft(self) -> crate::profile::ProfileDraft {
        crate::profile::ProfileDraft {
            name: self.name,
            breed: self.breed,
            age_years: self.age,
            weight_lbs: self.weight,
            dietary_needs: self.dietary_needs,
        }
    }
}

/// Feed command arguments.
#[derive(Debug, Args)]
pub struct FeedCommand {
    /// The dog's body weight in pounds
    #[arg(short, long)]
    pub weight: f64,

    /// The dog's age in years
    #[arg(short, long)]
    pub age: f64,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Theme command arguments.
#[derive(Debug, Args)]
pub struct ThemeCommand {
    /// What to do with the theme; defaults to toggling it
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

/// Theme actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ThemeAction {
    /// Flip between light and dark mode
    Toggle,
    /// Show the current theme without changing it
    Show,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_command_into_draft() {
        let cmd = AddCommand {
            name: "Rex".to_string(),
            breed: "Labrador".to_string(),
            age: 3.0,
            weight: 40.0,
            dietary_needs: "no grain".to_string(),
        };

        let draft = cmd.into_draft();
        assert_eq!(draft.name, "Rex");
        assert_eq!(draft.breed, "Labrador");
        assert!((draft.age_years - 3.0).abs() < f64::EPSILON);
        assert!((draft.weight_lbs - 40.0).abs() < f64::EPSILON);
        assert_eq!(draft.dietary_needs, "no grain");
    }

    #[test]
    fn test_status_command_debug() {
        let cmd = StatusCommand { json: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }

    #[test]
    fn test_theme_action_debug() {
        let action = ThemeAction::Toggle;
        let debug_str = format!("{action:?}");
        assert_eq!(debug_str, "Toggle");
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_feed_command_debug() {
        let cmd = FeedCommand {
            weight: 40.0,
            age: 3.0,
            json: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("weight"));
    }
}
