//! Style vocabulary shared by every theme
//!
//! Semantic identifiers (font, text and button styles) and the palette
//! value object. No behavior lives here beyond key lookups.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::color::Color;
use crate::core::font::Font;
use crate::error::ThemeError;

/// Named slots of a theme palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Primary,
    Secondary,
    TextDark,
    TextLight,
    TextDefault,
    BackgroundPrimary,
    BackgroundSecondary,
    CallToAction,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 8] = [
        ColorSlot::Primary,
        ColorSlot::Secondary,
        ColorSlot::TextDark,
        ColorSlot::TextLight,
        ColorSlot::TextDefault,
        ColorSlot::BackgroundPrimary,
        ColorSlot::BackgroundSecondary,
        ColorSlot::CallToAction,
    ];

    /// Key used in the `Colors` section of a theme resource
    pub fn key(&self) -> &'static str {
        match self {
            ColorSlot::Primary => "Primary",
            ColorSlot::Secondary => "Secondary",
            ColorSlot::TextDark => "TextDark",
            ColorSlot::TextLight => "TextLight",
            ColorSlot::TextDefault => "TextDefault",
            ColorSlot::BackgroundPrimary => "BackgroundPrimary",
            ColorSlot::BackgroundSecondary => "BackgroundSecondary",
            ColorSlot::CallToAction => "CallToAction",
        }
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete theme palette
///
/// Every slot is required; there are no defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub primary: Color,
    /// Part of the palette for completeness; no styling operation reads it.
    pub secondary: Color,

    pub text_dark: Color,
    pub text_light: Color,
    pub text_default: Color,

    pub background_primary: Color,
    pub background_secondary: Color,

    pub call_to_action: Color,
}

impl ThemeColors {
    /// Color stored in the given slot
    pub fn get(&self, slot: ColorSlot) -> Color {
        match slot {
            ColorSlot::Primary => self.primary,
            ColorSlot::Secondary => self.secondary,
            ColorSlot::TextDark => self.text_dark,
            ColorSlot::TextLight => self.text_light,
            ColorSlot::TextDefault => self.text_default,
            ColorSlot::BackgroundPrimary => self.background_primary,
            ColorSlot::BackgroundSecondary => self.background_secondary,
            ColorSlot::CallToAction => self.call_to_action,
        }
    }

    /// All slots with their colors, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, Color)> + '_ {
        ColorSlot::ALL.iter().map(move |slot| (*slot, self.get(*slot)))
    }

    /// Whether `color` is one of this palette's colors
    pub fn contains(&self, color: Color) -> bool {
        self.iter().any(|(_, c)| c == color)
    }
}

/// Font weights understood by the system font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Regular,
    Semibold,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontWeight::Light => "Light",
            FontWeight::Regular => "Regular",
            FontWeight::Semibold => "Semibold",
            FontWeight::Bold => "Bold",
        };
        f.write_str(name)
    }
}

/// Abstract font family and weight, independent of font resource names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    PrimaryLight,
    PrimaryRegular,
    PrimarySemibold,
    PrimaryBold,
    SecondaryLight,
    SecondaryRegular,
    SecondarySemibold,
    SecondaryBold,
}

impl FontStyle {
    pub const ALL: [FontStyle; 8] = [
        FontStyle::PrimaryLight,
        FontStyle::PrimaryRegular,
        FontStyle::PrimarySemibold,
        FontStyle::PrimaryBold,
        FontStyle::SecondaryLight,
        FontStyle::SecondaryRegular,
        FontStyle::SecondarySemibold,
        FontStyle::SecondaryBold,
    ];

    /// Key used in the `Fonts` section of a theme resource
    pub fn key(&self) -> &'static str {
        match self {
            FontStyle::PrimaryLight => "PrimaryLight",
            FontStyle::PrimaryRegular => "PrimaryRegular",
            FontStyle::PrimarySemibold => "PrimarySemibold",
            FontStyle::PrimaryBold => "PrimaryBold",
            FontStyle::SecondaryLight => "SecondaryLight",
            FontStyle::SecondaryRegular => "SecondaryRegular",
            FontStyle::SecondarySemibold => "SecondarySemibold",
            FontStyle::SecondaryBold => "SecondaryBold",
        }
    }

    pub fn weight(&self) -> FontWeight {
        match self {
            FontStyle::PrimaryLight | FontStyle::SecondaryLight => FontWeight::Light,
            FontStyle::PrimaryRegular | FontStyle::SecondaryRegular => FontWeight::Regular,
            FontStyle::PrimarySemibold | FontStyle::SecondarySemibold => FontWeight::Semibold,
            FontStyle::PrimaryBold | FontStyle::SecondaryBold => FontWeight::Bold,
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            FontStyle::PrimaryLight
                | FontStyle::PrimaryRegular
                | FontStyle::PrimarySemibold
                | FontStyle::PrimaryBold
        )
    }
}

impl FromStr for FontStyle {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontStyle::ALL
            .iter()
            .copied()
            .find(|style| style.key() == s)
            .ok_or_else(|| ThemeError::InvalidInput(format!("Unknown font style '{}'", s)))
    }
}

/// Semantic button roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    Submit,
    Cancel,
    Link,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 3] = [ButtonStyle::Submit, ButtonStyle::Cancel, ButtonStyle::Link];

    pub fn key(&self) -> &'static str {
        match self {
            ButtonStyle::Submit => "Submit",
            ButtonStyle::Cancel => "Cancel",
            ButtonStyle::Link => "Link",
        }
    }
}

/// Semantic text roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Title,
    Subtitle,
    Body,
}

impl TextStyle {
    pub const ALL: [TextStyle; 3] = [TextStyle::Title, TextStyle::Subtitle, TextStyle::Body];

    pub fn key(&self) -> &'static str {
        match self {
            TextStyle::Title => "Title",
            TextStyle::Subtitle => "Subtitle",
            TextStyle::Body => "Body",
        }
    }

    /// Font style and point size every theme uses for this role
    pub fn font_spec(&self) -> (FontStyle, f32) {
        match self {
            TextStyle::Title => (FontStyle::PrimarySemibold, 24.0),
            TextStyle::Subtitle => (FontStyle::PrimaryRegular, 18.0),
            TextStyle::Body => (FontStyle::PrimaryRegular, 14.0),
        }
    }
}

/// Resolved font and color for a text role
#[derive(Debug, Clone, PartialEq)]
pub struct TextAppearance {
    pub font: Font,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> ThemeColors {
        ThemeColors {
            primary: Color::rgb8(1, 0, 0),
            secondary: Color::rgb8(2, 0, 0),
            text_dark: Color::rgb8(3, 0, 0),
            text_light: Color::rgb8(4, 0, 0),
            text_default: Color::rgb8(5, 0, 0),
            background_primary: Color::rgb8(6, 0, 0),
            background_secondary: Color::rgb8(7, 0, 0),
            call_to_action: Color::rgb8(8, 0, 0),
        }
    }

    #[test]
    fn test_palette_slots_are_distinct() {
        let colors = palette();
        let values: Vec<Color> = colors.iter().map(|(_, c)| c).collect();
        assert_eq!(values.len(), 8);
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_palette_get_matches_fields() {
        let colors = palette();
        assert_eq!(colors.get(ColorSlot::TextLight), colors.text_light);
        assert_eq!(colors.get(ColorSlot::CallToAction), colors.call_to_action);
        assert!(colors.contains(colors.secondary));
        assert!(!colors.contains(Color::rgb8(9, 9, 9)));
    }

    #[test]
    fn test_font_style_from_str() {
        for style in FontStyle::ALL {
            assert_eq!(style.key().parse::<FontStyle>().unwrap(), style);
        }
        assert!("PrimaryHeavy".parse::<FontStyle>().is_err());
    }

    #[test]
    fn test_font_style_weight_and_family() {
        assert_eq!(FontStyle::SecondarySemibold.weight(), FontWeight::Semibold);
        assert!(FontStyle::PrimaryBold.is_primary());
        assert!(!FontStyle::SecondaryLight.is_primary());
    }

    #[test]
    fn test_text_style_font_spec() {
        assert_eq!(
            TextStyle::Title.font_spec(),
            (FontStyle::PrimarySemibold, 24.0)
        );
        assert_eq!(TextStyle::Body.font_spec(), (FontStyle::PrimaryRegular, 14.0));
    }
}
