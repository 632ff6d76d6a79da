//! Themes defined by a theme resource
//!
//! The palette is read eagerly and must be complete. Font identifiers are
//! looked up per request and fall back to the system font when the style
//! has no entry or the named family is not installed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::color::Color;
use crate::core::font::{resolve_or_system, Font, FontProvider};
use crate::core::source::{ThemeResources, ThemeSource};
use crate::core::style::{
    ColorSlot, FontStyle, FontWeight, TextAppearance, TextStyle, ThemeColors,
};
use crate::core::theme::{text_appearance, Theme};
use crate::error::{Result, ThemeError};

/// A theme whose palette and fonts come from a [`ThemeSource`]
pub struct ConfigDrivenTheme {
    name: String,
    colors: ThemeColors,
    font_names: BTreeMap<String, String>,
    fonts: Arc<dyn FontProvider>,
}

impl ConfigDrivenTheme {
    /// Build a theme from parsed resource contents
    ///
    /// Fails if either section is missing or any of the eight palette keys
    /// is absent.
    pub fn from_source(
        name: impl Into<String>,
        source: &ThemeSource,
        fonts: Arc<dyn FontProvider>,
    ) -> Result<Self> {
        let name = name.into();

        let color_values = source
            .colors
            .as_ref()
            .ok_or_else(|| ThemeError::MissingSection {
                theme: name.clone(),
                section: "Colors",
            })?;
        let font_names = source
            .fonts
            .clone()
            .ok_or_else(|| ThemeError::MissingSection {
                theme: name.clone(),
                section: "Fonts",
            })?;

        let color = |slot: ColorSlot| -> Result<Color> {
            color_values
                .get(slot.key())
                .map(|hex| Color::from_hex(hex))
                .ok_or_else(|| ThemeError::MissingColor {
                    theme: name.clone(),
                    key: slot.key(),
                })
        };

        let colors = ThemeColors {
            primary: color(ColorSlot::Primary)?,
            secondary: color(ColorSlot::Secondary)?,

            text_dark: color(ColorSlot::TextDark)?,
            text_light: color(ColorSlot::TextLight)?,
            text_default: color(ColorSlot::TextDefault)?,

            background_primary: color(ColorSlot::BackgroundPrimary)?,
            background_secondary: color(ColorSlot::BackgroundSecondary)?,

            call_to_action: color(ColorSlot::CallToAction)?,
        };

        tracing::debug!(
            "Built theme '{}' with {} font overrides",
            name,
            font_names.len()
        );

        Ok(Self {
            name,
            colors,
            font_names,
            fonts,
        })
    }

    /// Build a theme from the named resource
    pub fn from_resource(
        name: &str,
        resources: &ThemeResources,
        fonts: Arc<dyn FontProvider>,
    ) -> Result<Self> {
        let source = resources.locate(name)?;
        Self::from_source(name, &source, fonts)
    }

    /// Font family configured for a style, if any
    pub fn font_name(&self, style: FontStyle) -> Option<&str> {
        self.font_names.get(style.key()).map(String::as_str)
    }
}

impl Theme for ConfigDrivenTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    fn font(&self, style: FontStyle, size: f32) -> Font {
        match self.font_name(style) {
            Some(family) => resolve_or_system(self.fonts.as_ref(), family, size),
            None => Font::system(size, FontWeight::Regular),
        }
    }

    fn style_for_text_style(&self, style: TextStyle) -> TextAppearance {
        text_appearance(self, style, self.colors.primary)
    }
}
