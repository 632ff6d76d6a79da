//! CLI module for themekit
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod commands;
pub mod config;
pub mod preview;
pub mod theme;

pub use commands::{Cli, Commands};

use crate::core::catalog::ThemeCatalog;
use crate::core::config::Config;
use crate::error::Result;

/// Catalog of built-in themes plus the user's theme files
pub(crate) fn load_catalog(config: &Config) -> Result<ThemeCatalog> {
    ThemeCatalog::load(config.font_book(), &config.theme_resources())
}
