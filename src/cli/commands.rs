//! CLI command definitions using clap
//!
//! Defines the command structure for the `themekit` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// themekit - runtime theme resolution
///
/// Inspect, preview and validate themes.
/// Run without arguments to preview the active theme.
#[derive(Parser, Debug)]
#[command(name = "themekit", version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available themes
    List,

    /// Show a theme's palette, text styles and buttons
    Show {
        /// Theme name
        name: String,

        /// Print the resolved theme as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the demo screen with a theme
    Preview {
        /// Theme to activate (defaults to the active theme)
        #[arg(long, short)]
        theme: Option<String>,
    },

    /// Press the theme stepper repeatedly, rendering each step
    Cycle {
        /// Number of presses (defaults to one full round)
        #[arg(long, short = 'n')]
        steps: Option<usize>,
    },

    /// Check that a theme file builds a complete theme
    Validate {
        /// Path to a .toml or .json theme file
        path: PathBuf,
    },

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Remove a configuration value
    Remove {
        /// Configuration key
        key: ConfigKey,
    },
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigKey {
    /// Directory containing user theme files
    #[value(name = "themes-dir")]
    ThemesDir,

    /// Extra installed font families
    #[value(name = "fonts")]
    Fonts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_json() {
        let cli = Cli::try_parse_from(["themekit", "show", "lagoon", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Show { name, json }) => {
                assert_eq!(name, "lagoon");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_set() {
        let cli =
            Cli::try_parse_from(["themekit", "config", "set", "themes-dir", "/tmp/themes"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommand::Set {
                    key: ConfigKey::ThemesDir,
                    ..
                }
            }))
        ));
    }
}
