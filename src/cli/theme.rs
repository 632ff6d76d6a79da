//! Theme inspection command handlers

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::core::color::Color;
use crate::core::config::Config;
use crate::core::font::Font;
use crate::core::source::ThemeSource;
use crate::core::style::{ButtonStyle, FontStyle, TextStyle};
use crate::core::theme::Theme;
use crate::core::themes::ConfigDrivenTheme;
use crate::core::widget::{ControlState, RecordingButton};
use crate::demo::render::render_theme;
use crate::error::{Result, ThemeError};

/// Serializable snapshot of everything a theme resolves
#[derive(Debug, Serialize)]
pub struct ThemeReport {
    pub name: String,
    pub colors: BTreeMap<&'static str, String>,
    pub text_styles: BTreeMap<&'static str, TextReport>,
    pub buttons: BTreeMap<&'static str, ButtonReport>,
}

#[derive(Debug, Serialize)]
pub struct TextReport {
    pub color: String,
    pub font: Font,
}

#[derive(Debug, Serialize)]
pub struct ButtonReport {
    pub normal: Option<String>,
    pub highlighted: Option<String>,
    pub highlighted_alpha: Option<f32>,
    pub font: Option<Font>,
    pub background: Option<String>,
}

impl ThemeReport {
    pub fn from_theme(theme: &dyn Theme) -> Self {
        let colors = theme
            .colors()
            .iter()
            .map(|(slot, color)| (slot.key(), color.to_hex()))
            .collect();

        let text_styles = TextStyle::ALL
            .iter()
            .map(|style| {
                let appearance = theme.style_for_text_style(*style);
                (
                    style.key(),
                    TextReport {
                        color: appearance.color.to_hex(),
                        font: appearance.font,
                    },
                )
            })
            .collect();

        let buttons = ButtonStyle::ALL
            .iter()
            .map(|style| {
                let mut button = RecordingButton::default();
                theme.theme_button(&mut button, *style);
                let highlighted = button.title_color(ControlState::Highlighted);
                (
                    style.key(),
                    ButtonReport {
                        normal: button.title_color(ControlState::Normal).map(Color::to_hex),
                        highlighted: highlighted.map(Color::to_hex),
                        highlighted_alpha: highlighted.map(|c| c.alpha),
                        font: button.font.clone(),
                        background: button
                            .background_image(ControlState::Normal)
                            .map(str::to_string),
                    },
                )
            })
            .collect();

        Self {
            name: theme.name().to_string(),
            colors,
            text_styles,
            buttons,
        }
    }
}

/// Handle `themekit list`
pub fn handle_list(config: &Config) -> Result<()> {
    let catalog = super::load_catalog(config)?;

    println!("Available themes:");
    for (step, name) in catalog.names().enumerate() {
        println!("  {:>2}  {}", step, name);
    }

    if let Some(dir) = config.resolved_themes_dir() {
        println!();
        println!("User themes are read from {}", dir.display());
    }
    Ok(())
}

/// Handle `themekit show`
pub fn handle_show(config: &Config, name: &str, json: bool, styled: bool) -> Result<()> {
    let catalog = super::load_catalog(config)?;
    let theme = catalog.require(name)?;

    if json {
        let report = ThemeReport::from_theme(theme.as_ref());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_theme(theme.as_ref(), styled));
    }
    Ok(())
}

/// Handle `themekit validate`
pub fn handle_validate(config: &Config, path: &Path) -> Result<()> {
    let theme = validate_file(config, path)?;
    println!(
        "✓ {} defines a complete theme '{}'",
        path.display(),
        theme.name()
    );

    let fallbacks: Vec<&str> = FontStyle::ALL
        .iter()
        .filter(|style| theme.font_name(**style).is_none())
        .map(|style| style.key())
        .collect();
    if !fallbacks.is_empty() {
        println!("  System font used for: {}", fallbacks.join(", "));
    }
    Ok(())
}

/// Build a config-driven theme from a file, named after the file stem
pub fn validate_file(config: &Config, path: &Path) -> Result<ConfigDrivenTheme> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| ThemeError::InvalidInput(format!("Invalid theme path: {}", path.display())))?;

    let source = ThemeSource::from_path(path)?;
    ConfigDrivenTheme::from_source(name, &source, config.font_book())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::themes::DarkTheme;

    #[test]
    fn test_report_captures_dark_cancel_color() {
        let report = ThemeReport::from_theme(&DarkTheme::default());
        assert_eq!(report.name, "dark");
        assert_eq!(report.colors["TextDark"], "#999999");
        assert_eq!(report.buttons["Cancel"].normal.as_deref(), Some("#999999"));
        assert_eq!(report.buttons["Submit"].highlighted, None);
        assert_eq!(report.buttons["Link"].highlighted_alpha, Some(0.6));
        assert_eq!(report.text_styles["Title"].font.size, 24.0);
    }

    #[test]
    fn test_validate_file_reports_missing_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("half.toml");
        fs::write(&path, "[Colors]\nPrimary = \"#FFFFFF\"\n\n[Fonts]\n").unwrap();

        let err = validate_file(&Config::default(), &path).err().unwrap();
        assert!(matches!(err, ThemeError::MissingColor { key: "Secondary", .. }));
    }
}
