//! Theme resources
//!
//! A theme resource has two top-level sections: `Colors` maps palette slot
//! names to hex strings and `Fonts` maps font style names to font family
//! identifiers. Resources are TOML or JSON files, located by name in a list
//! of search directories, with a couple of themes embedded in the binary.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

pub const LAGOON_TOML: &str = include_str!("../../themes/lagoon.toml");
pub const SANDSTONE_TOML: &str = include_str!("../../themes/sandstone.toml");

/// Embedded resources, in catalog order
pub const EMBEDDED_THEMES: &[(&str, &str)] =
    &[("lagoon", LAGOON_TOML), ("sandstone", SANDSTONE_TOML)];

/// Extensions tried when locating a named resource, in order
const EXTENSIONS: &[&str] = &["toml", "json"];

/// Parsed contents of a theme resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSource {
    #[serde(rename = "Colors", default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<BTreeMap<String, String>>,

    #[serde(rename = "Fonts", default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<BTreeMap<String, String>>,
}

impl ThemeSource {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load a `.toml` or `.json` file
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&fs::read_to_string(path)?),
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            _ => Err(ThemeError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// An embedded resource by name
    pub fn embedded(name: &str) -> Option<Result<Self>> {
        EMBEDDED_THEMES
            .iter()
            .find(|(embedded, _)| *embedded == name)
            .map(|(_, contents)| Self::from_toml_str(contents))
    }
}

/// Whether a path looks like a theme resource
pub fn is_theme_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Locates named theme resources
#[derive(Debug, Clone, Default)]
pub struct ThemeResources {
    search_dirs: Vec<PathBuf>,
}

impl ThemeResources {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Find `name` in the search directories, then among embedded themes
    ///
    /// Files shadow embedded resources of the same name.
    pub fn locate(&self, name: &str) -> Result<ThemeSource> {
        for dir in &self.search_dirs {
            for ext in EXTENSIONS {
                let candidate = dir.join(format!("{}.{}", name, ext));
                if candidate.is_file() {
                    tracing::debug!("Loading theme '{}' from {}", name, candidate.display());
                    return ThemeSource::from_path(&candidate);
                }
            }
        }

        ThemeSource::embedded(name).unwrap_or_else(|| Err(ThemeError::ThemeNotFound(name.into())))
    }
}
