//! Application configuration management
//!
//! Handles loading and saving application settings including:
//! - The directory searched for user theme files
//! - Extra font families to treat as installed
//!
//! ## Environment Variable Override
//!
//! `THEMEKIT_CONFIG` points at an alternative config file, which is handy
//! for scripts and tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::font::{FontBook, FontProvider};
use crate::core::source::ThemeResources;
use crate::error::{Result, ThemeError};

const CONFIG_PATH_ENV: &str = "THEMEKIT_CONFIG";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Directory containing user theme files (defaults to `<config dir>/themes`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes_dir: Option<PathBuf>,

    /// Font families installed in addition to the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<String>,
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the configuration directory
    pub fn config_dir() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "themekit", "themekit")
            .ok_or_else(|| ThemeError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().to_path_buf())
    }

    /// Directory searched for user themes
    pub fn resolved_themes_dir(&self) -> Option<PathBuf> {
        self.themes_dir
            .clone()
            .or_else(|| Self::config_dir().ok().map(|dir| dir.join("themes")))
    }

    /// Built-in font book plus the configured extra families
    pub fn font_book(&self) -> Arc<dyn FontProvider> {
        Arc::new(FontBook::builtin().with_families(self.fonts.iter().cloned()))
    }

    /// Resource lookup rooted at the themes directory
    pub fn theme_resources(&self) -> ThemeResources {
        ThemeResources::new(self.resolved_themes_dir().into_iter().collect())
    }

    pub fn set_themes_dir(&mut self, dir: Option<PathBuf>) {
        self.themes_dir = dir;
    }

    /// Add a font family, ignoring duplicates
    pub fn add_font(&mut self, family: &str) {
        if !self.fonts.iter().any(|f| f == family) {
            self.fonts.push(family.to_string());
        }
    }
}
