//! Ordered list of selectable themes
//!
//! The catalog always starts with the compiled themes, followed by the
//! embedded theme resources and then any other theme files found in the
//! user's themes directory. Embedded themes are looked up the same way as
//! any named resource, so user files of the same name take their place. A stepper-style control selects themes by index.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::font::FontProvider;
use crate::core::registry::SharedTheme;
use crate::core::source::{is_theme_file, ThemeResources, ThemeSource, EMBEDDED_THEMES};
use crate::core::themes::{ConfigDrivenTheme, DarkTheme, DefaultTheme};
use crate::error::{Result, ThemeError};

/// Ordered, non-empty collection of themes
pub struct ThemeCatalog {
    themes: Vec<SharedTheme>,
}

impl ThemeCatalog {
    /// Compiled and embedded themes only
    pub fn builtin(fonts: Arc<dyn FontProvider>) -> Result<Self> {
        Self::load(fonts, &ThemeResources::default())
    }

    /// Built-in themes plus every theme file in the resource directories
    ///
    /// Embedded themes are resolved through `resources`, so a user file
    /// with an embedded theme's name replaces it in place. The compiled
    /// names are reserved. Other files that fail to load are skipped with a
    /// warning, as are duplicate names. Missing directories add nothing.
    pub fn load(fonts: Arc<dyn FontProvider>, resources: &ThemeResources) -> Result<Self> {
        let mut themes: Vec<SharedTheme> = vec![
            Arc::new(DarkTheme::new(Arc::clone(&fonts))),
            Arc::new(DefaultTheme::new(Arc::clone(&fonts))),
        ];

        for (name, _) in EMBEDDED_THEMES {
            let theme = match ConfigDrivenTheme::from_resource(name, resources, Arc::clone(&fonts)) {
                Ok(theme) => theme,
                Err(e) => {
                    tracing::warn!("Using the embedded '{}' theme: {}", name, e);
                    ConfigDrivenTheme::from_resource(
                        name,
                        &ThemeResources::default(),
                        Arc::clone(&fonts),
                    )?
                }
            };
            themes.push(Arc::new(theme));
        }

        let mut catalog = Self { themes };
        for dir in resources.search_dirs() {
            if !dir.is_dir() {
                tracing::debug!("Themes directory {} does not exist", dir.display());
                continue;
            }

            for path in theme_files(dir)? {
                let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };
                if EMBEDDED_THEMES.iter().any(|(embedded, _)| *embedded == name) {
                    continue;
                }
                if catalog.get(name).is_some() {
                    tracing::warn!(
                        "Skipping {}: a theme named '{}' already exists",
                        path.display(),
                        name
                    );
                    continue;
                }

                let theme = ThemeSource::from_path(&path).and_then(|source| {
                    ConfigDrivenTheme::from_source(name, &source, Arc::clone(&fonts))
                });
                match theme {
                    Ok(theme) => catalog.themes.push(Arc::new(theme)),
                    Err(e) => tracing::warn!("Skipping theme file {}: {}", path.display(), e),
                }
            }
        }

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Largest stepper value that selects a distinct theme
    pub fn max_step(&self) -> usize {
        self.themes.len().saturating_sub(1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|theme| theme.name())
    }

    /// Theme by name, ignoring case
    pub fn get(&self, name: &str) -> Option<SharedTheme> {
        self.themes
            .iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Theme by name, or a not-found error
    pub fn require(&self, name: &str) -> Result<SharedTheme> {
        self.get(name)
            .ok_or_else(|| ThemeError::ThemeNotFound(name.to_string()))
    }

    /// Theme selected by a stepper value, wrapping around
    pub fn at_step(&self, step: usize) -> SharedTheme {
        Arc::clone(&self.themes[step % self.themes.len()])
    }
}

/// Theme files in `dir`, sorted by path
fn theme_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_theme_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::font::FontBook;
    use crate::core::theme::Theme;

    const OCEAN: &str = r##"
        [Colors]
        Primary = "#006994"
        Secondary = "#0000FF"
        TextDark = "#1B3B4B"
        TextLight = "#F0F8FF"
        TextDefault = "#2F4F4F"
        BackgroundPrimary = "#E0F4FF"
        BackgroundSecondary = "#B0D8E8"
        CallToAction = "#FF7F50"

        [Fonts]
    "##;

    fn fonts() -> Arc<dyn FontProvider> {
        Arc::new(FontBook::builtin())
    }

    #[test]
    fn test_builtin_order() {
        let catalog = ThemeCatalog::builtin(fonts()).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["dark", "default", "lagoon", "sandstone"]);
        assert_eq!(catalog.max_step(), 3);
    }

    #[test]
    fn test_at_step_wraps() {
        let catalog = ThemeCatalog::builtin(fonts()).unwrap();
        assert_eq!(catalog.at_step(0).name(), "dark");
        assert_eq!(catalog.at_step(2).name(), "lagoon");
        assert_eq!(catalog.at_step(5).name(), "default");
    }

    #[test]
    fn test_get_ignores_case() {
        let catalog = ThemeCatalog::builtin(fonts()).unwrap();
        assert!(catalog.get("Lagoon").is_some());
        assert!(matches!(
            catalog.require("neon"),
            Err(ThemeError::ThemeNotFound(_))
        ));
    }

    #[test]
    fn test_load_user_themes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ocean.toml"), OCEAN).unwrap();
        fs::write(dir.path().join("broken.toml"), "[Colors]\nPrimary = \"#000000\"\n[Fonts]\n")
            .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a theme").unwrap();

        let resources = ThemeResources::new(vec![dir.path().to_path_buf()]);
        let catalog = ThemeCatalog::load(fonts(), &resources).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["dark", "default", "lagoon", "sandstone", "ocean"]);
    }

    #[test]
    fn test_load_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let catalog = ThemeCatalog::load(fonts(), &ThemeResources::new(vec![missing])).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_user_file_replaces_embedded_theme() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("lagoon.toml"),
            OCEAN.replace("#006994", "#FFFFFF"),
        )
        .unwrap();
        let resources = ThemeResources::new(vec![dir.path().to_path_buf()]);

        let catalog = ThemeCatalog::load(fonts(), &resources).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["dark", "default", "lagoon", "sandstone"]);

        let from_catalog = catalog.require("lagoon").unwrap();
        let from_resource = ConfigDrivenTheme::from_resource("lagoon", &resources, fonts()).unwrap();
        assert_eq!(from_catalog.colors().primary, Color::from_hex("#FFFFFF"));
        assert_eq!(from_catalog.colors(), from_resource.colors());
    }

    #[test]
    fn test_broken_user_file_keeps_embedded_theme() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sandstone.toml"), "[Colors]\n[Fonts]\n").unwrap();
        let resources = ThemeResources::new(vec![dir.path().to_path_buf()]);

        let catalog = ThemeCatalog::load(fonts(), &resources).unwrap();
        let sandstone = catalog.require("sandstone").unwrap();
        assert_eq!(sandstone.colors().primary, Color::from_hex("#B5562B"));
    }
}
