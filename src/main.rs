//! themekit - runtime theme resolution
//!
//! Inspect, validate and preview themes from the terminal.
//! Run without arguments to preview the active theme.
//!
//! Available as the `themekit` command.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use themekit::cli::commands::{Cli, Commands};
use themekit::cli::{config, preview, theme};
use themekit::core::config::Config;
use themekit::error::Result;

fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let styled = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();

    match cli.command {
        // Config commands manage their own loading and saving
        Some(Commands::Config(args)) => config::handle_config(args.command),

        command => {
            let settings = Config::load()?;
            match command {
                // No subcommand - preview the default theme
                None => preview::handle_preview(&settings, None, styled),
                Some(Commands::List) => theme::handle_list(&settings),
                Some(Commands::Show { name, json }) => {
                    theme::handle_show(&settings, &name, json, styled)
                }
                Some(Commands::Preview { theme }) => {
                    preview::handle_preview(&settings, theme.as_deref(), styled)
                }
                Some(Commands::Cycle { steps }) => preview::handle_cycle(&settings, steps, styled),
                Some(Commands::Validate { path }) => theme::handle_validate(&settings, &path),
                Some(Commands::Config(_)) => unreachable!(),
            }
        }
    }
}
